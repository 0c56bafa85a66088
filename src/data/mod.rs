//! Static datasets: per-map features and quests.
//!
//! Both are loaded once from tarkov.dev-style JSON and treated as read-only.

pub mod features;
pub mod quests;

use serde::{Deserialize, Deserializer};

/// Deserializes `null` (as well as a missing field, combined with
/// `#[serde(default)]`) into the type's default value
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reads a whole dataset file into memory
pub(crate) fn read_file(path: &std::path::Path) -> crate::Result<String> {
    let contents = std::fs::read_to_string(path)?;
    log::debug!("Read {} bytes from {}", contents.len(), path.display());
    Ok(contents)
}
