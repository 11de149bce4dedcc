// ─── Slug Resolver ───
// Maps a human slug to the numeric mod id through the GraphQL proxy.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::client::CatalogClient;
use crate::core::error::{CatalogError, CatalogResult};
use crate::core::http::{json_post, send_json_or_error_payload};

const SLUG_QUERY: &str = r#"
query getIDFromSlug($slug: String) {
    addons(slug: $slug) {
        id
        categorySection {
            id
        }
    }
}
"#;

const SLUG_OPERATION: &str = "getIDFromSlug";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SlugRequest<'a> {
    query: &'static str,
    variables: SlugVariables<'a>,
    operation_name: &'static str,
}

#[derive(Debug, Serialize)]
struct SlugVariables<'a> {
    slug: &'a str,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SlugResponse {
    #[serde(default)]
    data: Option<SlugData>,
    #[serde(default)]
    exception: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl SlugResponse {
    /// Whether the proxy reported a failure instead of (or alongside) data.
    fn is_error_payload(&self) -> bool {
        let present = |field: &Option<String>| field.as_deref().is_some_and(|s| !s.is_empty());
        present(&self.exception) || present(&self.message)
    }
}

#[derive(Debug, Default, Deserialize)]
struct SlugData {
    #[serde(default)]
    addons: Option<Vec<SlugAddon>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SlugAddon {
    id: u32,
    category_section: CategorySection,
}

#[derive(Debug, Deserialize)]
struct CategorySection {
    id: u32,
}

/// Pick the mod id out of a slug lookup response.
///
/// Error payloads win over data. Among mod-section matches the first in
/// response order is returned.
pub(crate) fn select_mod_id(
    slug: &str,
    response: SlugResponse,
    mod_section: u32,
) -> CatalogResult<u32> {
    if response.is_error_payload() {
        let exception = response.exception.filter(|e| !e.is_empty());
        let message = response.message.filter(|m| !m.is_empty());
        return Err(CatalogError::Remote {
            message: message.or(exception).unwrap_or_default(),
        });
    }

    response
        .data
        .and_then(|d| d.addons)
        .unwrap_or_default()
        .into_iter()
        .find(|addon| addon.category_section.id == mod_section)
        .map(|addon| addon.id)
        .ok_or_else(|| CatalogError::NotFound {
            slug: slug.to_string(),
        })
}

impl CatalogClient {
    /// Resolve a slug to the id of the mod (not resource pack or modpack)
    /// carrying it.
    pub async fn resolve_slug(&self, slug: &str) -> CatalogResult<u32> {
        debug!("Resolving slug {:?}", slug);

        let request = SlugRequest {
            query: SLUG_QUERY,
            variables: SlugVariables { slug },
            operation_name: SLUG_OPERATION,
        };
        let builder = json_post(&self.http, &self.config.graphql_endpoint, &request)?;
        let response: SlugResponse =
            send_json_or_error_payload("slug lookup", builder, SlugResponse::is_error_payload)
                .await?
                .unwrap_or_default();

        let id = select_mod_id(slug, response, self.config.mod_category_section)?;
        debug!("Slug {:?} resolved to {}", slug, id);
        Ok(id)
    }
}
