// SPDX-License-Identifier: MIT OR Apache-2.0

//! Normalized translation key.
//!
//! Every lookup, cache entry, file entry and environment variable name is built
//! from a `TranslationKey`, so `"tool-description"`, `"Tool-Description"` and
//! `"TOOL_DESCRIPTION"` all refer to the same translation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A translation key normalized to upper snake case.
///
/// Normalization uppercases the key and replaces every `-` with `_`. It is
/// applied on construction, including when a key is deserialized, so a
/// `TranslationKey` is always in normalized form.
///
/// # Examples
///
/// ```
/// use mcp_translations::domain::TranslationKey;
///
/// let key = TranslationKey::from("tool-description");
/// assert_eq!(key.as_str(), "TOOL_DESCRIPTION");
/// assert_eq!(key, TranslationKey::from("Tool_Description"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct TranslationKey(String);

impl TranslationKey {
    /// Creates a new key, normalizing it.
    pub fn new(key: &str) -> Self {
        TranslationKey(key.replace('-', "_").to_uppercase())
    }

    /// Returns the normalized key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the key into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns the environment variable that overrides this key.
    ///
    /// A trailing `_` on the prefix is ignored and an empty prefix yields the
    /// bare key.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcp_translations::domain::TranslationKey;
    ///
    /// let key = TranslationKey::from("foo-bar");
    /// assert_eq!(key.env_var_name("GITHUB_MCP"), "GITHUB_MCP_FOO_BAR");
    /// assert_eq!(key.env_var_name("GITHUB_MCP_"), "GITHUB_MCP_FOO_BAR");
    /// assert_eq!(key.env_var_name(""), "FOO_BAR");
    /// ```
    pub fn env_var_name(&self, prefix: &str) -> String {
        let prefix = prefix.trim_end_matches('_');
        if prefix.is_empty() {
            self.0.clone()
        } else {
            format!("{}_{}", prefix, self.0)
        }
    }
}

impl From<String> for TranslationKey {
    fn from(s: String) -> Self {
        TranslationKey::new(&s)
    }
}

impl From<&str> for TranslationKey {
    fn from(s: &str) -> Self {
        TranslationKey::new(s)
    }
}

impl From<TranslationKey> for String {
    fn from(key: TranslationKey) -> Self {
        key.0
    }
}

impl AsRef<str> for TranslationKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TranslationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
