// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory backend for tests.

use crate::domain::{Result, TranslationKey};
use crate::ports::ConfigBackend;
use std::collections::HashMap;
use std::path::Path;

/// A backend holding fixed overrides in memory.
///
/// Never reads the environment or the filesystem: `load_optional_file` always
/// reports that no file was found.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    values: HashMap<TranslationKey, String>,
    defaults: HashMap<TranslationKey, String>,
}

impl MemoryBackend {
    /// Creates a backend with no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an override for `key`.
    pub fn with_value(mut self, key: &str, value: impl Into<String>) -> Self {
        self.values.insert(TranslationKey::from(key), value.into());
        self
    }

    /// Replaces the override for `key`.
    pub fn set_value(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(TranslationKey::from(key), value.into());
    }

    /// Removes the override for `key`.
    pub fn remove_value(&mut self, key: &str) {
        self.values.remove(&TranslationKey::from(key));
    }
}

impl ConfigBackend for MemoryBackend {
    fn set_default(&mut self, key: &TranslationKey, value: &str) {
        self.defaults.insert(key.clone(), value.to_string());
    }

    fn get_string(&self, key: &TranslationKey) -> String {
        self.values
            .get(key)
            .or_else(|| self.defaults.get(key))
            .cloned()
            .unwrap_or_default()
    }

    fn load_optional_file(&mut self, _path: &Path) -> Result<bool> {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_override_beats_default() {
        let mut backend = MemoryBackend::new().with_value("foo-bar", "override");
        let key = TranslationKey::from("FOO_BAR");

        backend.set_default(&key, "fallback");
        assert_eq!(backend.get_string(&key), "override");

        backend.remove_value("foo_bar");
        assert_eq!(backend.get_string(&key), "fallback");

        backend.set_value("Foo-Bar", "again");
        assert_eq!(backend.get_string(&key), "again");
    }

    #[test]
    fn test_memory_unknown_key_is_empty() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.get_string(&TranslationKey::from("nope")), "");
    }

    #[test]
    fn test_memory_never_loads_files() {
        let mut backend = MemoryBackend::new();
        assert!(!backend
            .load_optional_file(Path::new("github-mcp-server-config.json"))
            .unwrap());
    }
}
