//! URL list writer

use crate::config::OUTPUT_FILE_NAME;
use crate::error::{Error, Result, ResultExt};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Indentation used in `data.json`
const INDENT: &[u8] = b"    ";

/// Serialize `urls` as a JSON array indented with four spaces
pub fn to_pretty_json(urls: &[String]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    urls.serialize(&mut serializer)?;
    Ok(buf)
}

/// Write `urls` to `data.json` inside `dir`, replacing any previous file.
///
/// Returns the path written.
pub fn save_urls(urls: &[String], dir: impl AsRef<Path>) -> Result<PathBuf> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(Error::config(format!(
            "Output path is not a directory: {}",
            dir.display()
        )));
    }

    let path = dir.join(OUTPUT_FILE_NAME);
    fs::write(&path, to_pretty_json(urls)?)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Saved {} image URLs to {}", urls.len(), path.display());
    Ok(path)
}
