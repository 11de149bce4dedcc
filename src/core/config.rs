use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{CatalogError, CatalogResult};

pub const DEFAULT_API_BASE: &str = "https://addons-ecs.forgesvc.net/api/v2";
pub const DEFAULT_GRAPHQL_ENDPOINT: &str = "https://curse.nikky.moe/graphql";
pub const DEFAULT_USER_AGENT: &str = "packwiz/packwiz client";

/// Minecraft's game id in the catalog.
pub const MINECRAFT_GAME_ID: u32 = 432;
/// Category section holding mods, as opposed to resource packs and modpacks.
pub const MOD_CATEGORY_SECTION: u32 = 8;

/// Endpoints and fixed request parameters for the catalog.
///
/// Every field has a default, so a settings file only needs the keys it
/// overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogConfig {
    pub api_base: String,
    pub graphql_endpoint: String,
    pub user_agent: String,
    pub game_id: u32,
    pub search_page_size: u32,
    pub search_category_id: u32,
    pub search_section_id: u32,
    pub mod_category_section: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.into(),
            graphql_endpoint: DEFAULT_GRAPHQL_ENDPOINT.into(),
            user_agent: DEFAULT_USER_AGENT.into(),
            game_id: MINECRAFT_GAME_ID,
            search_page_size: 10,
            search_category_id: 0,
            search_section_id: 6,
            mod_category_section: MOD_CATEGORY_SECTION,
        }
    }
}

impl CatalogConfig {
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        serde_json::from_str(json).map_err(CatalogError::ConfigParse)
    }

    /// Read a JSON settings file.
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| CatalogError::Config {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&json)
    }

    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    pub fn with_graphql_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.graphql_endpoint = endpoint.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_search_page_size(mut self, size: u32) -> Self {
        self.search_page_size = size;
        self
    }

    /// Join a path onto the REST base, tolerating a trailing slash on the base.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_settings_keep_defaults() {
        let cfg = CatalogConfig::from_json(r#"{ "userAgent": "mypack/1.0" }"#).unwrap();
        assert_eq!(cfg.user_agent, "mypack/1.0");
        assert_eq!(cfg.api_base, DEFAULT_API_BASE);
        assert_eq!(cfg.game_id, 432);
        assert_eq!(cfg.mod_category_section, 8);
    }

    #[test]
    fn endpoint_trims_trailing_slash() {
        let cfg = CatalogConfig::default().with_api_base("http://localhost:8080/api/");
        assert_eq!(cfg.endpoint("addon/42"), "http://localhost:8080/api/addon/42");
    }

    #[test]
    fn garbage_settings_are_rejected() {
        let err = CatalogConfig::from_json("[1, 2]").unwrap_err();
        assert!(matches!(err, CatalogError::ConfigParse(_)));
    }

    #[test]
    fn missing_settings_file_reports_path() {
        let path = Path::new("/definitely/not/here/catalog.json");
        match CatalogConfig::load(path) {
            Err(CatalogError::Config { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected config error, got {other:?}"),
        }
    }
}
