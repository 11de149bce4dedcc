pub(crate) mod addon;
mod enums;
pub(crate) mod file;

pub use addon::{GameVersionFile, ModRecord};
pub use enums::{
    parse_loader_filter, DependencyKind, HashAlgorithm, ModLoader, ReleaseChannel, UnknownCode,
};
pub use file::{DependencyEdge, FileHash, FileRecord};

use serde::{Deserialize, Deserializer};

/// The catalog sends `null` where an empty list is meant.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
