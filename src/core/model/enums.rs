use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::CatalogError;

/// Raised when an integer code has no matching variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCode {
    pub kind: &'static str,
    pub code: u8,
}

impl fmt::Display for UnknownCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} code {}", self.kind, self.code)
    }
}

/// Stability tier of an uploaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ReleaseChannel {
    Release = 1,
    Beta = 2,
    Alpha = 3,
}

impl TryFrom<u8> for ReleaseChannel {
    type Error = UnknownCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(ReleaseChannel::Release),
            2 => Ok(ReleaseChannel::Beta),
            3 => Ok(ReleaseChannel::Alpha),
            _ => Err(UnknownCode {
                kind: "release channel",
                code,
            }),
        }
    }
}

impl From<ReleaseChannel> for u8 {
    fn from(channel: ReleaseChannel) -> Self {
        channel as u8
    }
}

impl fmt::Display for ReleaseChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseChannel::Release => write!(f, "release"),
            ReleaseChannel::Beta => write!(f, "beta"),
            ReleaseChannel::Alpha => write!(f, "alpha"),
        }
    }
}

/// How a file relates to another mod it references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DependencyKind {
    Embedded = 1,
    Optional = 2,
    Required = 3,
    Tool = 4,
    Incompatible = 5,
    Include = 6,
}

impl TryFrom<u8> for DependencyKind {
    type Error = UnknownCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(DependencyKind::Embedded),
            2 => Ok(DependencyKind::Optional),
            3 => Ok(DependencyKind::Required),
            4 => Ok(DependencyKind::Tool),
            5 => Ok(DependencyKind::Incompatible),
            6 => Ok(DependencyKind::Include),
            _ => Err(UnknownCode {
                kind: "dependency",
                code,
            }),
        }
    }
}

impl From<DependencyKind> for u8 {
    fn from(kind: DependencyKind) -> Self {
        kind as u8
    }
}

/// Algorithm tag on a reported file hash.
///
/// The catalog has added algorithms before, so unknown codes are kept rather
/// than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum HashAlgorithm {
    Sha1,
    Md5,
    Other(u32),
}

impl From<u32> for HashAlgorithm {
    fn from(code: u32) -> Self {
        match code {
            1 => HashAlgorithm::Sha1,
            2 => HashAlgorithm::Md5,
            other => HashAlgorithm::Other(other),
        }
    }
}

impl From<HashAlgorithm> for u32 {
    fn from(algo: HashAlgorithm) -> Self {
        match algo {
            HashAlgorithm::Sha1 => 1,
            HashAlgorithm::Md5 => 2,
            HashAlgorithm::Other(code) => code,
        }
    }
}

/// Mod loaders the search endpoint can filter on.
///
/// An unfiltered search is `Option::<ModLoader>::None`; the parameter is then
/// left off the request entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModLoader {
    Forge,
    Cauldron,
    LiteLoader,
    Fabric,
}

impl ModLoader {
    /// Numeric code the search endpoint expects.
    pub fn code(self) -> u8 {
        match self {
            ModLoader::Forge => 1,
            ModLoader::Cauldron => 2,
            ModLoader::LiteLoader => 3,
            ModLoader::Fabric => 4,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(ModLoader::Forge),
            2 => Some(ModLoader::Cauldron),
            3 => Some(ModLoader::LiteLoader),
            4 => Some(ModLoader::Fabric),
            _ => None,
        }
    }
}

impl fmt::Display for ModLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModLoader::Forge => write!(f, "forge"),
            ModLoader::Cauldron => write!(f, "cauldron"),
            ModLoader::LiteLoader => write!(f, "liteloader"),
            ModLoader::Fabric => write!(f, "fabric"),
        }
    }
}

impl FromStr for ModLoader {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "forge" => Ok(ModLoader::Forge),
            "cauldron" => Ok(ModLoader::Cauldron),
            "liteloader" => Ok(ModLoader::LiteLoader),
            "fabric" => Ok(ModLoader::Fabric),
            _ => Err(CatalogError::InvalidModLoader(s.to_string())),
        }
    }
}

/// Parse a user-facing loader filter, where `"any"` (or nothing) means no filter.
pub fn parse_loader_filter(s: &str) -> Result<Option<ModLoader>, CatalogError> {
    let trimmed = s.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("any") {
        return Ok(None);
    }
    trimmed.parse().map(Some)
}
