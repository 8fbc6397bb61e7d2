// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered backend over prioritized configuration sources.

use crate::adapters::{EnvVarAdapter, JsonFileAdapter};
use crate::domain::{Result, TranslationKey};
use crate::ports::{ConfigBackend, ConfigSource};
use std::collections::HashMap;
use std::path::Path;

/// The production backend: environment variables over an optional JSON file
/// over per-key defaults.
///
/// Sources are kept sorted by priority (highest first) and the first source
/// that has a value for a key wins. A source that fails to answer is logged and
/// skipped.
///
/// # Examples
///
/// ```rust
/// use mcp_translations::adapters::LayeredBackend;
/// use mcp_translations::domain::TranslationKey;
/// use mcp_translations::ports::ConfigBackend;
///
/// let mut backend = LayeredBackend::with_env_prefix("LAYERED_DOC_EXAMPLE");
/// let key = TranslationKey::from("greeting");
///
/// backend.set_default(&key, "hello");
/// assert_eq!(backend.get_string(&key), "hello");
/// ```
pub struct LayeredBackend {
    /// Sources in priority order (highest first)
    sources: Vec<Box<dyn ConfigSource>>,
    /// Values returned when no source has the key
    defaults: HashMap<TranslationKey, String>,
}

impl LayeredBackend {
    /// Creates a backend with no sources.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            defaults: HashMap::new(),
        }
    }

    /// Creates a backend reading environment overrides with the given prefix.
    pub fn with_env_prefix(prefix: impl Into<String>) -> Self {
        let mut backend = Self::new();
        backend.add_source(Box::new(EnvVarAdapter::with_prefix(prefix)));
        backend
    }

    /// Adds a source, keeping the sources sorted by priority.
    ///
    /// A source with the same name as an existing one replaces it.
    pub fn add_source(&mut self, source: Box<dyn ConfigSource>) {
        self.sources.retain(|s| s.name() != source.name());
        self.sources.push(source);
        self.sources.sort_by_key(|s| std::cmp::Reverse(s.priority()));
    }

    /// Returns the names of the sources in the order they are queried.
    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Queries all sources for a value, respecting priority order.
    fn query_sources(&self, key: &TranslationKey) -> Option<String> {
        for source in &self.sources {
            match source.get(key) {
                Ok(Some(value)) => return Some(value),
                Ok(None) => continue,
                Err(e) => {
                    tracing::debug!(
                        "Error querying source '{}' for key '{}': {}",
                        source.name(),
                        key,
                        e
                    );
                    continue;
                }
            }
        }
        None
    }
}

impl Default for LayeredBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigBackend for LayeredBackend {
    fn set_default(&mut self, key: &TranslationKey, value: &str) {
        self.defaults.insert(key.clone(), value.to_string());
    }

    fn get_string(&self, key: &TranslationKey) -> String {
        self.query_sources(key)
            .or_else(|| self.defaults.get(key).cloned())
            .unwrap_or_default()
    }

    fn load_optional_file(&mut self, path: &Path) -> Result<bool> {
        if !path.exists() {
            tracing::debug!("No translation config at {}", path.display());
            return Ok(false);
        }

        let adapter = JsonFileAdapter::from_file(path)?;
        self.add_source(Box::new(adapter));
        Ok(true)
    }
}
