use reqwest::Client;

use crate::core::config::CatalogConfig;
use crate::core::error::{CatalogError, CatalogResult};
use crate::core::http::build_http_client;

/// Entry point for every catalog lookup.
///
/// Cheap to clone; clones share the underlying connection pool. Holds no
/// mutable state, so concurrent calls need no coordination.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    pub(crate) http: Client,
    pub(crate) config: CatalogConfig,
}

impl CatalogClient {
    pub fn new(config: CatalogConfig) -> CatalogResult<Self> {
        let http = build_http_client(&config)?;
        Ok(Self { http, config })
    }

    /// Use a caller-built `reqwest::Client` (proxies, TLS, timeouts).
    pub fn with_client(config: CatalogConfig, http: Client) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }
}

/// Reject a single-item response whose id is not the one asked for.
pub(crate) fn ensure_identity(
    entity: &'static str,
    requested: u32,
    received: u32,
) -> CatalogResult<()> {
    if requested == received {
        Ok(())
    } else {
        Err(CatalogError::IdentityMismatch {
            entity,
            requested,
            received,
        })
    }
}

#[cfg(test)]
pub(crate) fn test_client() -> CatalogClient {
    let config = CatalogConfig::default()
        .with_api_base("http://catalog.test/api/v2")
        .with_graphql_endpoint("http://catalog.test/graphql");
    CatalogClient::new(config).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_check() {
        assert!(ensure_identity("addon", 10, 10).is_ok());
        let err = ensure_identity("addon", 10, 0).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::IdentityMismatch {
                requested: 10,
                received: 0,
                ..
            }
        ));
    }

    #[test]
    fn client_keeps_config() {
        let client = test_client();
        assert_eq!(client.config().api_base, "http://catalog.test/api/v2");
    }
}
