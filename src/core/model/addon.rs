use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::enums::{ModLoader, ReleaseChannel};
use super::file::FileRecord;
use super::null_as_default;

/// One catalog entry (an "addon" in the catalog's own terms).
///
/// `id` is the only stable join key; `slug` can repeat across categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModRecord {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub website_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub latest_files: Vec<FileRecord>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub game_version_latest_files: Vec<GameVersionFile>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mod_loaders: Vec<String>,
}

/// Recommended file for a game version, as listed on the mod.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameVersionFile {
    pub game_version: String,
    #[serde(rename = "projectFileId")]
    pub file_id: u32,
    #[serde(rename = "projectFileName", default)]
    pub file_name: String,
    pub file_type: ReleaseChannel,
    #[serde(rename = "modLoader", default)]
    pub mod_loader_code: Option<u8>,
}

impl GameVersionFile {
    pub fn mod_loader(&self) -> Option<ModLoader> {
        self.mod_loader_code.and_then(ModLoader::from_code)
    }
}

impl ModRecord {
    /// First listed file for `game_version`, in catalog order.
    ///
    /// Entries for several channels or loaders may share a version; no
    /// preference between them is applied here.
    pub fn recommended_file_id(&self, game_version: &str) -> Option<u32> {
        self.game_version_latest_files
            .iter()
            .find(|entry| entry.game_version == game_version)
            .map(|entry| entry.file_id)
    }

    /// Game version → recommended file id. The first entry per version wins.
    pub fn game_version_files(&self) -> HashMap<String, u32> {
        let mut map = HashMap::new();
        for entry in &self.game_version_latest_files {
            map.entry(entry.game_version.clone())
                .or_insert(entry.file_id);
        }
        map
    }

    pub fn latest_file(&self, file_id: u32) -> Option<&FileRecord> {
        self.latest_files.iter().find(|f| f.id == file_id)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::core::model::file::fixtures::JEI_FILE;

    pub fn jei_mod() -> String {
        format!(
            r#"{{
                "id": 238222,
                "name": "Just Enough Items (JEI)",
                "slug": "jei",
                "websiteUrl": "https://www.curseforge.com/minecraft/mc-mods/jei",
                "latestFiles": [{JEI_FILE}],
                "gameVersionLatestFiles": [
                    {{ "gameVersion": "1.16.4", "projectFileId": 3043174, "projectFileName": "jei-1.16.4-7.6.1.65.jar", "fileType": 1, "modLoader": 1 }},
                    {{ "gameVersion": "1.16.4", "projectFileId": 3050000, "projectFileName": "jei-1.16.4-7.6.2.0.jar", "fileType": 2, "modLoader": 1 }},
                    {{ "gameVersion": "1.12.2", "projectFileId": 2995000, "projectFileName": "jei_1.12.2-4.16.1.jar", "fileType": 1, "modLoader": null }}
                ],
                "modLoaders": ["Forge"]
            }}"#
        )
    }
}
