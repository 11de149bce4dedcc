mod core;

pub use crate::core::client::CatalogClient;
pub use crate::core::config::CatalogConfig;
pub use crate::core::date::parse_file_date;
pub use crate::core::error::{CatalogError, CatalogResult, ErrorKind};
pub use crate::core::fingerprint::{ExactMatch, FingerprintMatchResult};
pub use crate::core::hash::{best_hash, BestHash, HashFormat};
pub use crate::core::http::build_http_client;
pub use crate::core::model::{
    parse_loader_filter, DependencyEdge, DependencyKind, FileHash, FileRecord, GameVersionFile,
    HashAlgorithm, ModLoader, ModRecord, ReleaseChannel, UnknownCode,
};
pub use crate::core::reader::FileGroups;
pub use crate::core::search::SearchQuery;

/// Defaults and well-known catalog constants.
pub mod config {
    pub use crate::core::config::{
        DEFAULT_API_BASE, DEFAULT_GRAPHQL_ENDPOINT, DEFAULT_USER_AGENT, MINECRAFT_GAME_ID,
        MOD_CATEGORY_SECTION,
    };
}
