// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable source adapter.
//!
//! This module provides an adapter that reads translation overrides from
//! prefixed environment variables such as `GITHUB_MCP_TOOL_DESCRIPTION`.

use crate::domain::{Result, TranslationError, TranslationKey};
use crate::ports::ConfigSource;
use std::collections::HashMap;
use std::env;

/// Prefix applied to every environment override.
pub const ENV_PREFIX: &str = "GITHUB_MCP";

/// Maximum length for environment variable values (prevents DoS)
const MAX_ENV_VALUE_LEN: usize = 1048576; // 1MB

/// Source adapter for environment variable overrides.
///
/// The variable for a key is `<PREFIX>_<NORMALIZED_KEY>`. Variables are read
/// when a key is looked up, not when the adapter is built, so a variable set
/// before the first resolution of its key is always seen.
///
/// A variable that is set but empty counts as unset.
///
/// # Priority
///
/// Environment variables have a priority of 2, which means they override
/// configuration files (priority 1).
///
/// # Examples
///
/// ```rust
/// use mcp_translations::adapters::EnvVarAdapter;
/// use mcp_translations::ports::ConfigSource;
///
/// // Reads GITHUB_MCP_<KEY>
/// let adapter = EnvVarAdapter::new();
///
/// // Reads MYAPP_<KEY>
/// let adapter = EnvVarAdapter::with_prefix("MYAPP");
/// assert_eq!(adapter.prefix(), "MYAPP");
/// ```
#[derive(Debug, Clone)]
pub struct EnvVarAdapter {
    /// Prefix joined to the key with `_`
    prefix: String,
    /// Fixed values used instead of the process environment
    values: Option<HashMap<TranslationKey, String>>,
}

impl EnvVarAdapter {
    /// Creates an adapter using the default `GITHUB_MCP` prefix.
    pub fn new() -> Self {
        Self::with_prefix(ENV_PREFIX)
    }

    /// Creates an adapter with a custom prefix.
    ///
    /// A trailing `_` is optional: `"MYAPP"` and `"MYAPP_"` behave the same.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            values: None,
        }
    }

    /// Creates an adapter with pre-populated values for testing.
    ///
    /// **Note**: This method is primarily intended for testing. The process
    /// environment is never consulted; keys are normalized and looked up
    /// without a prefix.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mcp_translations::adapters::EnvVarAdapter;
    /// use mcp_translations::ports::ConfigSource;
    /// use std::collections::HashMap;
    ///
    /// let mut values = HashMap::new();
    /// values.insert("tool-description".to_string(), "from env".to_string());
    ///
    /// let adapter = EnvVarAdapter::with_values(values);
    /// assert_eq!(
    ///     adapter.get_str("TOOL_DESCRIPTION").unwrap().as_deref(),
    ///     Some("from env")
    /// );
    /// ```
    pub fn with_values(values: HashMap<String, String>) -> Self {
        Self {
            prefix: ENV_PREFIX.to_string(),
            values: Some(
                values
                    .into_iter()
                    .map(|(k, v)| (TranslationKey::from(k), v))
                    .collect(),
            ),
        }
    }

    /// Returns the prefix this adapter reads.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn read_var(&self, key: &TranslationKey) -> Result<Option<String>> {
        let name = key.env_var_name(&self.prefix);

        let value = match env::var(&name) {
            Ok(value) => value,
            Err(env::VarError::NotPresent) => return Ok(None),
            Err(e @ env::VarError::NotUnicode(_)) => {
                return Err(TranslationError::SourceError {
                    source_name: self.name().to_string(),
                    message: format!("Environment variable {} is not valid unicode", name),
                    source: Some(Box::new(e)),
                })
            }
        };

        if value.len() > MAX_ENV_VALUE_LEN {
            tracing::debug!(
                "Skipping oversized environment variable {}: value_len={} (max {})",
                name,
                value.len(),
                MAX_ENV_VALUE_LEN
            );
            return Ok(None);
        }

        if value.is_empty() {
            return Ok(None);
        }

        tracing::debug!("Environment variable {} overrides {}", name, key);
        Ok(Some(value))
    }
}

impl Default for EnvVarAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigSource for EnvVarAdapter {
    fn name(&self) -> &str {
        "env"
    }

    fn priority(&self) -> u8 {
        2
    }

    fn get(&self, key: &TranslationKey) -> Result<Option<String>> {
        match &self.values {
            Some(values) => Ok(values.get(key).filter(|v| !v.is_empty()).cloned()),
            None => self.read_var(key),
        }
    }

    fn all_keys(&self) -> Result<Vec<TranslationKey>> {
        if let Some(values) = &self.values {
            return Ok(values.keys().cloned().collect());
        }

        let prefix = format!("{}_", self.prefix.trim_end_matches('_'));
        Ok(env::vars()
            .filter_map(|(name, _)| name.strip_prefix(&prefix).map(TranslationKey::from))
            .collect())
    }
}
