// ─── Fingerprint Reconciler ───
// Matches locally computed murmur2 fingerprints back to catalog files.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::client::CatalogClient;
use crate::core::error::CatalogResult;
use crate::core::http::{json_post, send_json};
use crate::core::model::FileRecord;

/// Raw response of the fingerprint endpoint. `exactFingerprints` and
/// `unmatchedFingerprints` are not read: both partitions are rebuilt from the
/// request so that nothing is lost or counted twice.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct FingerprintResponse {
    is_cache_built: bool,
    exact_matches: Option<Vec<RawExactMatch>>,
    partial_matches: Option<Vec<u32>>,
    partial_match_fingerprints: serde_json::Value,
    installed_fingerprints: Option<Vec<u32>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawExactMatch {
    id: u32,
    file: FileRecord,
    #[serde(default)]
    latest_files: Option<Vec<FileRecord>>,
}

/// A local file identified exactly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExactMatch {
    pub fingerprint: u32,
    pub mod_id: u32,
    pub file: FileRecord,
    /// The mod's current latest files, for "is this still the newest" checks.
    pub latest_files: Vec<FileRecord>,
}

/// Every requested fingerprint lands in exactly one partition.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FingerprintMatchResult {
    pub is_cache_built: bool,
    pub exact: Vec<ExactMatch>,
    pub partial: Vec<u32>,
    pub installed: Vec<u32>,
    pub unmatched: Vec<u32>,
    /// Passed through as sent; how "partial" is scored is not documented.
    pub partial_match_details: serde_json::Value,
}

impl FingerprintMatchResult {
    pub fn len(&self) -> usize {
        self.exact.len() + self.partial.len() + self.installed.len() + self.unmatched.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn exact_for(&self, fingerprint: u32) -> Option<&ExactMatch> {
        self.exact.iter().find(|m| m.fingerprint == fingerprint)
    }
}

/// Input fingerprints in first-seen order, without repeats.
fn dedup(fingerprints: &[u32]) -> Vec<u32> {
    let mut seen = HashSet::new();
    fingerprints
        .iter()
        .copied()
        .filter(|fp| seen.insert(*fp))
        .collect()
}

/// Partition `requested` using the service's answer.
///
/// Precedence is exact > partial > installed > unmatched. An exact match needs
/// a file record; a bare entry in `exactFingerprints` is not enough. Anything
/// the service did not mention is unmatched, and anything it mentioned that
/// was not requested is dropped.
pub(crate) fn partition(
    requested: &[u32],
    response: FingerprintResponse,
) -> FingerprintMatchResult {
    let partial: HashSet<u32> = response
        .partial_matches
        .unwrap_or_default()
        .into_iter()
        .collect();
    let installed: HashSet<u32> = response
        .installed_fingerprints
        .unwrap_or_default()
        .into_iter()
        .collect();
    let mut matches = response.exact_matches.unwrap_or_default();

    let mut result = FingerprintMatchResult {
        is_cache_built: response.is_cache_built,
        partial_match_details: response.partial_match_fingerprints,
        ..FingerprintMatchResult::default()
    };

    for fp in dedup(requested) {
        if let Some(pos) = matches.iter().position(|m| m.file.package_fingerprint == fp) {
            let raw = matches.swap_remove(pos);
            result.exact.push(ExactMatch {
                fingerprint: fp,
                mod_id: raw.id,
                file: raw.file,
                latest_files: raw.latest_files.unwrap_or_default(),
            });
        } else if partial.contains(&fp) {
            result.partial.push(fp);
        } else if installed.contains(&fp) {
            result.installed.push(fp);
        } else {
            result.unmatched.push(fp);
        }
    }

    result
}

impl CatalogClient {
    /// Classify local fingerprints against the catalog in one request.
    pub async fn match_fingerprints(
        &self,
        fingerprints: &[u32],
    ) -> CatalogResult<FingerprintMatchResult> {
        let unique = dedup(fingerprints);
        let url = self.config.endpoint("fingerprint");
        debug!("Matching {} fingerprints", unique.len());

        let request = json_post(&self.http, &url, &unique)?;
        let response = send_json::<Option<FingerprintResponse>>("fingerprint matches", request)
            .await?
            .flatten()
            .unwrap_or_default();
        let result = partition(&unique, response);
        debug!(
            "Fingerprints: {} exact, {} partial, {} installed, {} unmatched",
            result.exact.len(),
            result.partial.len(),
            result.installed.len(),
            result.unmatched.len()
        );
        Ok(result)
    }
}
