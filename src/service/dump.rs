// SPDX-License-Identifier: MIT OR Apache-2.0

//! Writing resolved translations to disk.

use crate::domain::{Result, TranslationError, TranslationMap};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes `map` to `path` as a JSON object indented with two spaces.
///
/// Any existing file is overwritten. Keys are written in sorted order.
///
/// # Errors
///
/// Returns [`TranslationError::DumpError`] if the file cannot be created, the
/// map cannot be serialized, or the write fails.
///
/// # Examples
///
/// ```rust
/// use mcp_translations::domain::{TranslationKey, TranslationMap};
/// use mcp_translations::service::dump_translation_key_map;
///
/// # fn main() -> mcp_translations::domain::Result<()> {
/// let dir = tempfile::tempdir()?;
/// let path = dir.path().join("github-mcp-server-config.json");
///
/// let mut map = TranslationMap::new();
/// map.insert(TranslationKey::from("tool-description"), "Does a thing".to_string());
/// dump_translation_key_map(&map, &path)?;
///
/// let written = std::fs::read_to_string(&path)?;
/// assert_eq!(written, "{\n  \"TOOL_DESCRIPTION\": \"Does a thing\"\n}");
/// # Ok(())
/// # }
/// ```
pub fn dump_translation_key_map(map: &TranslationMap, path: &Path) -> Result<()> {
    let mut file = File::create(path).map_err(|e| TranslationError::DumpError {
        message: format!("error creating file {}", path.display()),
        source: Some(Box::new(e)),
    })?;

    let json = serde_json::to_string_pretty(map).map_err(|e| TranslationError::DumpError {
        message: "error marshaling map to JSON".to_string(),
        source: Some(Box::new(e)),
    })?;

    file.write_all(json.as_bytes())
        .map_err(|e| TranslationError::DumpError {
            message: format!("error writing to file {}", path.display()),
            source: Some(Box::new(e)),
        })?;

    tracing::debug!("Wrote {} translations to {}", map.len(), path.display());
    Ok(())
}
