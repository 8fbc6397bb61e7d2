// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON file source adapter.
//!
//! This module provides an adapter that reads translation overrides from a JSON
//! file such as `github-mcp-server-config.json`.

use crate::domain::{Result, TranslationError, TranslationKey};
use crate::ports::{ConfigParser, ConfigSource};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum allowed file size for JSON configuration files (10MB)
/// This prevents denial of service attacks via extremely large files
const MAX_JSON_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// JSON parser implementation.
///
/// The top level must be an object. Strings are kept as-is, numbers and
/// booleans are stringified, nested objects and arrays are flattened with dot
/// notation, and `null` entries are dropped.
///
/// # Examples
///
/// ```rust
/// use mcp_translations::adapters::JsonParser;
/// use mcp_translations::ports::ConfigParser;
///
/// let parser = JsonParser::new();
/// let result = parser.parse(r#"{"tools": {"get_me": "Who am I"}, "limit": 5}"#).unwrap();
/// assert_eq!(result.get("tools.get_me"), Some(&"Who am I".to_string()));
/// assert_eq!(result.get("limit"), Some(&"5".to_string()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonParser;

impl JsonParser {
    /// Creates a new JSON parser.
    pub fn new() -> Self {
        JsonParser
    }

    /// Flattens a JSON value into a flat map with dot notation keys.
    fn flatten_json(value: &serde_json::Value, prefix: &str, result: &mut HashMap<String, String>) {
        match value {
            serde_json::Value::Object(map) => {
                for (key, val) in map {
                    let new_prefix = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{}.{}", prefix, key)
                    };
                    Self::flatten_json(val, &new_prefix, result);
                }
            }
            serde_json::Value::Array(seq) => {
                for (i, val) in seq.iter().enumerate() {
                    let new_prefix = format!("{}.{}", prefix, i);
                    Self::flatten_json(val, &new_prefix, result);
                }
            }
            serde_json::Value::String(s) => {
                result.insert(prefix.to_string(), s.clone());
            }
            serde_json::Value::Number(n) => {
                result.insert(prefix.to_string(), n.to_string());
            }
            serde_json::Value::Bool(b) => {
                result.insert(prefix.to_string(), b.to_string());
            }
            serde_json::Value::Null => {}
        }
    }
}

impl ConfigParser for JsonParser {
    fn parse(&self, content: &str) -> Result<HashMap<String, String>> {
        let value: serde_json::Value =
            serde_json::from_str(content).map_err(|e| TranslationError::ParseError {
                message: format!("Failed to parse JSON: {}", e),
                source: Some(Box::new(e)),
            })?;

        if !value.is_object() {
            return Err(TranslationError::ParseError {
                message: "Expected a JSON object at the top level".to_string(),
                source: None,
            });
        }

        let mut result = HashMap::new();
        Self::flatten_json(&value, "", &mut result);
        Ok(result)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["json"]
    }
}

/// Source adapter for a JSON configuration file.
///
/// Keys from the file are normalized the same way as lookup keys, so
/// `"tool-description"` and `"TOOL_DESCRIPTION"` in the file refer to the same
/// translation. When both spellings appear, which one wins is unspecified.
///
/// # Priority
///
/// JSON files have a priority of 1, which means they are overridden by
/// environment variables (priority 2).
///
/// # Examples
///
/// ```rust,no_run
/// use mcp_translations::adapters::JsonFileAdapter;
/// use mcp_translations::ports::ConfigSource;
///
/// let adapter = JsonFileAdapter::from_file("github-mcp-server-config.json").unwrap();
/// let value = adapter.get_str("tool-description").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileAdapter {
    /// Path to the JSON file
    file_path: PathBuf,
    /// Parsed values, keyed by normalized key
    values: HashMap<TranslationKey, String>,
}

impl JsonFileAdapter {
    /// Creates a new JSON file adapter from a specific file path.
    ///
    /// Fails if the file cannot be read, is larger than 10MB, or is not a JSON
    /// object.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file_path = path.as_ref().to_path_buf();
        let file_name = display_name(&file_path);

        let metadata = fs::metadata(&file_path).map_err(|e| TranslationError::SourceError {
            source_name: "json-file".to_string(),
            message: format!("Failed to read file metadata: {}", file_name),
            source: Some(Box::new(e)),
        })?;

        if metadata.len() > MAX_JSON_FILE_SIZE {
            return Err(TranslationError::SourceError {
                source_name: "json-file".to_string(),
                message: format!(
                    "Configuration file too large: {} bytes (max {} bytes)",
                    metadata.len(),
                    MAX_JSON_FILE_SIZE
                ),
                source: None,
            });
        }

        let content = fs::read_to_string(&file_path).map_err(|e| TranslationError::SourceError {
            source_name: "json-file".to_string(),
            message: format!("Failed to read configuration file: {}", file_name),
            source: Some(Box::new(e)),
        })?;

        let values: HashMap<TranslationKey, String> = JsonParser::new()
            .parse(&content)?
            .into_iter()
            .map(|(k, v)| (TranslationKey::from(k), v))
            .collect();

        tracing::debug!("Loaded {} translations from {}", values.len(), file_name);

        Ok(Self { file_path, values })
    }

    /// Returns the path to the configuration file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

fn display_name(path: &Path) -> &str {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unknown>")
}

impl ConfigSource for JsonFileAdapter {
    fn name(&self) -> &str {
        "json-file"
    }

    fn priority(&self) -> u8 {
        1
    }

    fn get(&self, key: &TranslationKey) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn all_keys(&self) -> Result<Vec<TranslationKey>> {
        Ok(self.values.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_json_parser_flat() {
        let parser = JsonParser::new();
        let result = parser
            .parse(r#"{"TOOL_DESCRIPTION": "Does a thing"}"#)
            .unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(
            result.get("TOOL_DESCRIPTION"),
            Some(&"Does a thing".to_string())
        );
    }

    #[test]
    fn test_json_parser_nested() {
        let parser = JsonParser::new();
        let json = r#"
{
  "tools": {
    "get_me": {
      "description": "Who am I"
    }
  }
}
"#;
        let result = parser.parse(json).unwrap();

        assert_eq!(
            result.get("tools.get_me.description"),
            Some(&"Who am I".to_string())
        );
    }

    #[test]
    fn test_json_parser_array() {
        let parser = JsonParser::new();
        let result = parser.parse(r#"{"servers": ["one", "two"]}"#).unwrap();

        assert_eq!(result.get("servers.0"), Some(&"one".to_string()));
        assert_eq!(result.get("servers.1"), Some(&"two".to_string()));
    }

    #[test]
    fn test_json_parser_mixed_types() {
        let parser = JsonParser::new();
        let json = r#"
{
  "string_value": "hello",
  "number_value": 42,
  "float_value": 1.5,
  "bool_value": true,
  "null_value": null
}
"#;
        let result = parser.parse(json).unwrap();

        assert_eq!(result.get("string_value"), Some(&"hello".to_string()));
        assert_eq!(result.get("number_value"), Some(&"42".to_string()));
        assert_eq!(result.get("float_value"), Some(&"1.5".to_string()));
        assert_eq!(result.get("bool_value"), Some(&"true".to_string()));
        assert_eq!(result.get("null_value"), None);
    }

    #[test]
    fn test_json_parser_invalid() {
        let parser = JsonParser::new();
        let result = parser.parse("{\"unterminated\": ");

        assert!(matches!(result, Err(TranslationError::ParseError { .. })));
    }

    #[test]
    fn test_json_parser_rejects_non_object() {
        let parser = JsonParser::new();

        assert!(parser.parse(r#"["a", "b"]"#).is_err());
        assert!(parser.parse(r#""just a string""#).is_err());
    }

    #[test]
    fn test_json_parser_supported_extensions() {
        assert_eq!(JsonParser::default().supported_extensions(), &["json"]);
    }

    #[test]
    fn test_json_adapter_from_file_normalizes_keys() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            r#"{{"tool-description": "from file", "OTHER_KEY": "other"}}"#
        )
        .unwrap();

        let adapter = JsonFileAdapter::from_file(temp_file.path()).unwrap();

        assert_eq!(adapter.name(), "json-file");
        assert_eq!(adapter.priority(), 1);
        assert_eq!(
            adapter.get_str("TOOL_DESCRIPTION").unwrap(),
            Some("from file".to_string())
        );
        assert_eq!(
            adapter.get_str("other-key").unwrap(),
            Some("other".to_string())
        );
    }

    #[test]
    fn test_json_adapter_all_keys() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, r#"{{"key1": "value1", "key2": "value2"}}"#).unwrap();

        let adapter = JsonFileAdapter::from_file(temp_file.path()).unwrap();
        let keys = adapter.all_keys().unwrap();

        assert_eq!(keys.len(), 2);
        assert!(keys.contains(&TranslationKey::from("KEY1")));
        assert!(keys.contains(&TranslationKey::from("KEY2")));
    }

    #[test]
    fn test_json_adapter_nonexistent_key() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, r#"{{"key": "value"}}"#).unwrap();

        let adapter = JsonFileAdapter::from_file(temp_file.path()).unwrap();
        assert!(adapter.get_str("nonexistent").unwrap().is_none());
    }

    #[test]
    fn test_json_adapter_file_path() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{{}}").unwrap();

        let adapter = JsonFileAdapter::from_file(temp_file.path()).unwrap();
        assert_eq!(adapter.file_path(), temp_file.path());
    }

    #[test]
    fn test_json_adapter_nonexistent_file() {
        let result = JsonFileAdapter::from_file("/nonexistent/path/to/config.json");
        assert!(matches!(result, Err(TranslationError::SourceError { .. })));
    }

    #[test]
    fn test_json_adapter_malformed_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "not json at all").unwrap();

        let result = JsonFileAdapter::from_file(temp_file.path());
        assert!(matches!(result, Err(TranslationError::ParseError { .. })));
    }
}
