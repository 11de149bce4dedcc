use serde::Serialize;
use tracing::debug;

use crate::core::client::CatalogClient;
use crate::core::error::CatalogResult;
use crate::core::http::{json_get, send_json};
use crate::core::model::{ModLoader, ModRecord};

/// Free-text mod search with optional filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    pub game_version: Option<String>,
    /// `None` searches across all loaders.
    pub mod_loader: Option<ModLoader>,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_game_version(mut self, version: impl Into<String>) -> Self {
        self.game_version = Some(version.into());
        self
    }

    pub fn with_mod_loader(mut self, loader: Option<ModLoader>) -> Self {
        self.mod_loader = loader;
        self
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchParams<'a> {
    game_id: u32,
    page_size: u32,
    category_id: u32,
    section_id: u32,
    search_filter: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    game_version: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mod_loader_type: Option<u8>,
}

impl CatalogClient {
    fn search_request(&self, query: &SearchQuery) -> reqwest::RequestBuilder {
        let params = SearchParams {
            game_id: self.config.game_id,
            page_size: self.config.search_page_size,
            category_id: self.config.search_category_id,
            section_id: self.config.search_section_id,
            search_filter: &query.text,
            game_version: query.game_version.as_deref().filter(|v| !v.is_empty()),
            mod_loader_type: query.mod_loader.map(ModLoader::code),
        };
        let url = self.config.endpoint("addon/search");
        json_get(&self.http, &url).query(&params)
    }

    pub async fn search(&self, query: &SearchQuery) -> CatalogResult<Vec<ModRecord>> {
        debug!(
            "Searching {:?} (version={:?}, loader={:?})",
            query.text, query.game_version, query.mod_loader
        );
        let results: Vec<ModRecord> =
            send_json::<Option<Vec<ModRecord>>>("search results", self.search_request(query))
                .await?
                .flatten()
                .unwrap_or_default();
        debug!("Search returned {} mods", results.len());
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::client::test_client;
    use std::collections::HashMap;

    fn params_of(query: &SearchQuery) -> HashMap<String, String> {
        let request = test_client().search_request(query).build().unwrap();
        assert_eq!(request.url().path(), "/api/v2/addon/search");
        request.url().query_pairs().into_owned().collect()
    }

    #[test]
    fn any_loader_is_omitted_entirely() {
        let params = params_of(&SearchQuery::new("jei"));
        assert!(!params.contains_key("modLoaderType"));
        assert!(!params.contains_key("gameVersion"));
        assert_eq!(params["searchFilter"], "jei");
    }

    #[test]
    fn loader_is_sent_as_numeric_code() {
        let query = SearchQuery::new("sodium").with_mod_loader(Some(ModLoader::Fabric));
        assert_eq!(params_of(&query)["modLoaderType"], "4");
    }

    #[test]
    fn fixed_paging_parameters_are_present() {
        let params = params_of(&SearchQuery::new("x"));
        assert_eq!(params["gameId"], "432");
        assert_eq!(params["pageSize"], "10");
        assert_eq!(params["categoryId"], "0");
        assert_eq!(params["sectionId"], "6");
    }

    #[test]
    fn game_version_filter_is_sent_when_non_empty() {
        let params = params_of(&SearchQuery::new("x").with_game_version("1.16.5"));
        assert_eq!(params["gameVersion"], "1.16.5");

        let params = params_of(&SearchQuery::new("x").with_game_version(""));
        assert!(!params.contains_key("gameVersion"));
    }

    #[test]
    fn search_text_is_encoded() {
        let request = test_client()
            .search_request(&SearchQuery::new("just enough & more"))
            .build()
            .unwrap();
        let query = request.url().query().unwrap();
        assert!(!query.contains("just enough & more"));
        let params: HashMap<_, _> = request.url().query_pairs().into_owned().collect();
        assert_eq!(params["searchFilter"], "just enough & more");
    }
}
