use std::path::PathBuf;
use thiserror::Error;

/// Central error type for every catalog operation.
/// Every module returns `Result<T, CatalogError>`.
#[derive(Debug, Error)]
pub enum CatalogError {
    // ── Network ─────────────────────────────────────────
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Catalog returned HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    // ── Payload ─────────────────────────────────────────
    #[error("Failed to decode {context}: {source}")]
    Decode {
        context: &'static str,
        source: serde_json::Error,
    },

    #[error("Catalog reported an error: {message}")]
    Remote { message: String },

    #[error("Unexpected {entity} ID in catalog response: requested {requested}, got {received}")]
    IdentityMismatch {
        entity: &'static str,
        requested: u32,
        received: u32,
    },

    // ── Resolution ──────────────────────────────────────
    #[error("No mod found for slug {slug:?}")]
    NotFound { slug: String },

    #[error("Unrecognised timestamp: {input:?}")]
    MalformedTimestamp { input: String },

    #[error("Unknown mod loader: {0}")]
    InvalidModLoader(String),

    // ── Configuration ───────────────────────────────────
    #[error("Cannot read config at {path:?}: {source}")]
    Config {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    ConfigParse(serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Coarse classification of a [`CatalogError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Decode,
    Remote,
    IdentityMismatch,
    NotFound,
    MalformedTimestamp,
    InvalidInput,
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::Transport(_) | CatalogError::HttpStatus { .. } => ErrorKind::Transport,
            CatalogError::Decode { .. } => ErrorKind::Decode,
            CatalogError::Remote { .. } => ErrorKind::Remote,
            CatalogError::IdentityMismatch { .. } => ErrorKind::IdentityMismatch,
            CatalogError::NotFound { .. } => ErrorKind::NotFound,
            CatalogError::MalformedTimestamp { .. } => ErrorKind::MalformedTimestamp,
            CatalogError::InvalidModLoader(_)
            | CatalogError::Config { .. }
            | CatalogError::ConfigParse(_) => ErrorKind::InvalidInput,
        }
    }

    /// Whether repeating the same call unchanged could succeed.
    ///
    /// Only transport-level failures qualify: connection problems, timeouts,
    /// rate limiting and server-side 5xx. Anything the catalog answered
    /// coherently is terminal for that input.
    pub fn is_retryable(&self) -> bool {
        match self {
            CatalogError::Transport(e) => !e.is_builder() && !e.is_decode(),
            CatalogError::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    pub(crate) fn decode(context: &'static str, source: serde_json::Error) -> Self {
        CatalogError::Decode { context, source }
    }
}

// Errors are serialised as their display text, e.g. into reports or logs.
impl serde::Serialize for CatalogError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
