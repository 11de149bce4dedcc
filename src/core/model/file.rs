use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{DependencyKind, HashAlgorithm, ReleaseChannel};
use super::null_as_default;
use crate::core::date::deserialize_file_date;

/// One uploaded artifact of a mod.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub id: u32,
    pub file_name: String,
    pub display_name: String,
    #[serde(deserialize_with = "deserialize_file_date")]
    pub file_date: DateTime<Utc>,
    pub file_length: u64,
    pub release_type: ReleaseChannel,
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(
        rename = "gameVersion",
        default,
        deserialize_with = "null_as_default"
    )]
    pub game_versions: Vec<String>,
    /// Murmur2 content fingerprint.
    pub package_fingerprint: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dependencies: Vec<DependencyEdge>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hashes: Vec<FileHash>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyEdge {
    #[serde(rename = "addonId")]
    pub mod_id: u32,
    #[serde(rename = "type")]
    pub kind: DependencyKind,
}

/// A content hash reported by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHash {
    pub value: String,
    pub algorithm: HashAlgorithm,
}

impl FileRecord {
    pub fn supports_game_version(&self, version: &str) -> bool {
        self.game_versions.iter().any(|v| v == version)
    }

    /// Mods this file cannot run without.
    pub fn required_dependencies(&self) -> impl Iterator<Item = u32> + '_ {
        self.dependencies
            .iter()
            .filter(|d| d.kind == DependencyKind::Required)
            .map(|d| d.mod_id)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    pub const JEI_FILE: &str = r#"{
        "id": 3043174,
        "displayName": "jei-1.16.4-7.6.1.65.jar",
        "fileName": "jei-1.16.4-7.6.1.65.jar",
        "fileDate": "2020-12-08T04:10:31.913Z",
        "fileLength": 661440,
        "releaseType": 1,
        "fileStatus": 4,
        "downloadUrl": "https://edge.forgecdn.net/files/3043/174/jei-1.16.4-7.6.1.65.jar",
        "isAlternate": false,
        "dependencies": [
            { "id": 0, "addonId": 238222, "type": 3, "fileId": 0 },
            { "id": 0, "addonId": 306612, "type": 2, "fileId": 0 }
        ],
        "hashes": [
            { "value": "d4e8f9a1d6c2a0d1e2f3a4b5c6d7e8f9", "algorithm": 2 },
            { "value": "0a1b2c3d4e5f60718293a4b5c6d7e8f901234567", "algorithm": 1 }
        ],
        "packageFingerprint": 3089143260,
        "gameVersion": ["1.16.4", "Forge"]
    }"#;
}

#[cfg(test)]
mod tests {
    use super::fixtures::JEI_FILE;
    use super::*;

    #[test]
    fn deserialize_file_record() {
        let file: FileRecord = serde_json::from_str(JEI_FILE).unwrap();
        assert_eq!(file.id, 3043174);
        assert_eq!(file.release_type, ReleaseChannel::Release);
        assert_eq!(file.package_fingerprint, 3089143260);
        assert_eq!(file.hashes.len(), 2);
        assert!(file.supports_game_version("1.16.4"));
        assert!(!file.supports_game_version("1.16.5"));
        assert_eq!(file.required_dependencies().collect::<Vec<_>>(), vec![238222]);
    }

    #[test]
    fn null_lists_decode_as_empty() {
        let json = r#"{
            "id": 1,
            "displayName": "a",
            "fileName": "a.jar",
            "fileDate": "2019-03-02T08:15:30.5",
            "fileLength": 10,
            "releaseType": 3,
            "downloadUrl": null,
            "dependencies": null,
            "hashes": null,
            "packageFingerprint": 42,
            "gameVersion": null
        }"#;
        let file: FileRecord = serde_json::from_str(json).unwrap();
        assert!(file.dependencies.is_empty());
        assert!(file.hashes.is_empty());
        assert!(file.game_versions.is_empty());
        assert_eq!(file.download_url, None);
        assert_eq!(file.release_type, ReleaseChannel::Alpha);
    }

    #[test]
    fn invalid_dependency_kind_fails_decode() {
        let json = JEI_FILE.replace(r#""type": 2"#, r#""type": 9"#);
        assert!(serde_json::from_str::<FileRecord>(&json).is_err());
    }

    #[test]
    fn hash_algorithm_past_byte_range_does_not_fail_decode() {
        let json = JEI_FILE.replace(r#""algorithm": 2"#, r#""algorithm": 256"#);
        let file: FileRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(file.hashes[0].algorithm, HashAlgorithm::Other(256));
    }

    #[test]
    fn bad_file_date_fails_decode() {
        let json = JEI_FILE.replace("2020-12-08T04:10:31.913Z", "last tuesday");
        let err = serde_json::from_str::<FileRecord>(&json).unwrap_err();
        assert!(err.to_string().contains("last tuesday"));
    }

    #[test]
    fn serialized_date_is_rfc3339() {
        let file: FileRecord = serde_json::from_str(JEI_FILE).unwrap();
        let value = serde_json::to_value(&file).unwrap();
        assert_eq!(value["fileDate"], "2020-12-08T04:10:31.913Z");
        assert_eq!(value["releaseType"], 1);
    }
}
