// ─── Catalog Reader ───
// Mod and file metadata, single and batch.

use std::collections::HashMap;

use tracing::debug;

use crate::core::client::{ensure_identity, CatalogClient};
use crate::core::error::{CatalogError, CatalogResult};
use crate::core::http::{json_get, json_post, send_json};
use crate::core::model::{FileRecord, ModRecord};

/// Batch file lookup result. The outer key is whatever grouping the catalog
/// chose; it is not guaranteed to be a mod id.
pub type FileGroups = HashMap<String, Vec<FileRecord>>;

impl CatalogClient {
    /// Fetch one mod, checking the catalog answered for the requested id.
    pub async fn get_mod(&self, mod_id: u32) -> CatalogResult<ModRecord> {
        let url = self.config.endpoint(&format!("addon/{}", mod_id));
        debug!("Fetching mod {}", mod_id);

        let record = send_json("mod", json_get(&self.http, &url)).await?;
        checked("addon", mod_id, record, |m: &ModRecord| m.id)
    }

    /// Fetch many mods in one request. Entries are returned as decoded.
    pub async fn get_mods(&self, mod_ids: &[u32]) -> CatalogResult<Vec<ModRecord>> {
        let url = self.config.endpoint("addon/");
        debug!("Fetching {} mods", mod_ids.len());

        let records: Vec<ModRecord> =
            send_json::<Option<Vec<ModRecord>>>("mod list", json_post(&self.http, &url, mod_ids)?)
                .await?
                .flatten()
                .unwrap_or_default();
        debug!("Received {} mods", records.len());
        Ok(records)
    }

    /// Fetch one file of a mod, checking the catalog answered for that file.
    pub async fn get_file(&self, mod_id: u32, file_id: u32) -> CatalogResult<FileRecord> {
        let url = self
            .config
            .endpoint(&format!("addon/{}/file/{}", mod_id, file_id));
        debug!("Fetching file {} of mod {}", file_id, mod_id);

        let record = send_json("file", json_get(&self.http, &url)).await?;
        checked("file", file_id, record, |f: &FileRecord| f.id)
    }

    /// Fetch many files by id in one request.
    pub async fn get_files(&self, file_ids: &[u32]) -> CatalogResult<FileGroups> {
        let url = self.config.endpoint("addon/files");
        debug!("Fetching {} files", file_ids.len());

        let groups: FileGroups =
            send_json::<Option<FileGroups>>("file list", json_post(&self.http, &url, file_ids)?)
                .await?
                .flatten()
                .unwrap_or_default();
        debug!("Received {} file groups", groups.len());
        Ok(groups)
    }
}

/// An empty body counts as id 0, which never matches a real request.
fn checked<T>(
    entity: &'static str,
    requested: u32,
    record: Option<T>,
    id_of: impl Fn(&T) -> u32,
) -> CatalogResult<T> {
    match record {
        Some(record) => {
            ensure_identity(entity, requested, id_of(&record))?;
            Ok(record)
        }
        None => Err(CatalogError::IdentityMismatch {
            entity,
            requested,
            received: 0,
        }),
    }
}
