use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::path::Path;

/// Helpers shared by the file-backed repositories

pub fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Writes to a sibling tmp file and renames it into place, so a crash
/// mid-write never leaves a truncated store behind.
pub fn write_json<T: Serialize>(path: &Path, items: &[T]) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, serde_json::to_vec_pretty(items)?)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
