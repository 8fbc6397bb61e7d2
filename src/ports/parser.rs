// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.

use crate::domain::Result;
use std::collections::HashMap;

/// A trait for parsing configuration file content into flat key-value pairs.
///
/// Nested structures are flattened with dot notation, so
///
/// ```json
/// { "tools": { "get_me": "Who am I" } }
/// ```
///
/// becomes `tools.get_me` -> `"Who am I"`. Keys are returned as written in the
/// file; normalization is left to the caller.
///
/// # Examples
///
/// ```rust
/// use mcp_translations::ports::ConfigParser;
/// use mcp_translations::domain::Result;
/// use std::collections::HashMap;
///
/// struct LineParser;
///
/// impl ConfigParser for LineParser {
///     fn parse(&self, content: &str) -> Result<HashMap<String, String>> {
///         Ok(content
///             .lines()
///             .filter_map(|line| line.split_once('='))
///             .map(|(k, v)| (k.to_string(), v.to_string()))
///             .collect())
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["properties"]
///     }
/// }
///
/// let parsed = LineParser.parse("a=1\nb=2").unwrap();
/// assert_eq!(parsed.get("b"), Some(&"2".to_string()));
/// ```
pub trait ConfigParser {
    /// Parses raw file content into a flat key-value map.
    fn parse(&self, content: &str) -> Result<HashMap<String, String>>;

    /// Returns the file extensions (without the leading dot) this parser handles.
    fn supported_extensions(&self) -> &[&str];
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestParser;

    impl ConfigParser for TestParser {
        fn parse(&self, _content: &str) -> Result<HashMap<String, String>> {
            let mut map = HashMap::new();
            map.insert("tools.get_me".to_string(), "Who am I".to_string());
            Ok(map)
        }

        fn supported_extensions(&self) -> &[&str] {
            &["test", "tst"]
        }
    }

    #[test]
    fn test_parser_parse() {
        let result = TestParser.parse("dummy content").unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.get("tools.get_me"), Some(&"Who am I".to_string()));
    }

    #[test]
    fn test_parser_supported_extensions() {
        assert_eq!(TestParser.supported_extensions(), &["test", "tst"]);
    }
}
