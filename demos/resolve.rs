//! Resolve slugs to mods and print the file each would pin.
//!
//! ```text
//! cargo run --example resolve -- jei appleskin --version 1.16.5
//! ```

use std::future::Future;
use std::time::Duration;

use curseforge_resolver::{CatalogClient, CatalogConfig, CatalogError, ModRecord};
use futures_util::stream::{self, StreamExt};
use thiserror::Error;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const CONCURRENCY: usize = 4;
const MAX_ATTEMPTS: u32 = 3;
const CALL_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Error)]
enum LookupError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("gave up after {0} timed out attempts")]
    TimedOut(u32),
}

/// Deadline plus capped exponential backoff around one catalog call.
async fn with_retry<T, F, Fut>(label: &str, mut call: F) -> Result<T, LookupError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, CatalogError>>,
{
    let mut delay = Duration::from_millis(500);
    let mut attempt = 1;
    loop {
        let outcome = match tokio::time::timeout(CALL_TIMEOUT, call()).await {
            Ok(result) => result,
            Err(_) => {
                warn!("{} timed out (attempt {})", label, attempt);
                if attempt >= MAX_ATTEMPTS {
                    return Err(LookupError::TimedOut(attempt));
                }
                attempt += 1;
                continue;
            }
        };
        match outcome {
            Err(e) if e.is_retryable() && attempt < MAX_ATTEMPTS => {
                warn!("{} failed (attempt {}): {}", label, attempt, e);
                tokio::time::sleep(delay).await;
                delay *= 2;
                attempt += 1;
            }
            other => return other.map_err(LookupError::from),
        }
    }
}

async fn lookup(client: &CatalogClient, slug: &str) -> Result<ModRecord, LookupError> {
    let id = with_retry(slug, || client.resolve_slug(slug)).await?;
    with_retry(slug, || client.get_mod(id)).await
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,curseforge_resolver=debug")),
        )
        .init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let game_version = match args.iter().position(|a| a == "--version") {
        Some(pos) if pos + 1 < args.len() => {
            let version = args.remove(pos + 1);
            args.remove(pos);
            Some(version)
        }
        _ => None,
    };

    let config = match std::env::var_os("CATALOG_CONFIG") {
        Some(path) => CatalogConfig::load(path.as_ref()),
        None => Ok(CatalogConfig::default()),
    };
    let client = match config.and_then(CatalogClient::new) {
        Ok(client) => client,
        Err(e) => {
            error!("Cannot set up catalog client: {}", e);
            return;
        }
    };

    let results: Vec<_> = stream::iter(args)
        .map(|slug| {
            let client = &client;
            async move {
                let result = lookup(client, &slug).await;
                (slug, result)
            }
        })
        .buffer_unordered(CONCURRENCY)
        .collect()
        .await;

    for (slug, result) in results {
        match result {
            Ok(record) => {
                let pinned = game_version
                    .as_deref()
                    .and_then(|v| record.recommended_file_id(v));
                info!(
                    "{} -> {} ({}), recommended file: {:?}",
                    slug, record.id, record.name, pinned
                );
                for file in &record.latest_files {
                    let hash = file.best_hash();
                    info!(
                        "  {} [{}] {}={} ({})",
                        file.file_name,
                        file.release_type,
                        hash.format,
                        hash.value,
                        file.file_date.to_rfc3339()
                    );
                }
            }
            Err(LookupError::Catalog(e)) => error!("{}: {} ({:?})", slug, e, e.kind()),
            Err(e) => error!("{}: {}", slug, e),
        }
    }
}
