// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration backend trait definition.
//!
//! The backend is the layered reader the resolver consults on a cache miss. It
//! is injected into [`TranslationHelper`](crate::service::TranslationHelper) so
//! tests can swap the real environment/file stack for an in-memory one.

use crate::domain::{Result, TranslationKey};
use std::path::Path;

/// A layered key-value reader with per-key defaults.
///
/// # Examples
///
/// ```rust
/// use mcp_translations::adapters::MemoryBackend;
/// use mcp_translations::domain::TranslationKey;
/// use mcp_translations::ports::ConfigBackend;
///
/// let mut backend = MemoryBackend::new().with_value("greeting", "hi");
/// let key = TranslationKey::from("farewell");
///
/// backend.set_default(&key, "bye");
/// assert_eq!(backend.get_string(&key), "bye");
/// assert_eq!(backend.get_string(&TranslationKey::from("greeting")), "hi");
/// ```
pub trait ConfigBackend {
    /// Registers the value returned for `key` when no layer overrides it.
    ///
    /// Setting a default again replaces the previous one.
    fn set_default(&mut self, key: &TranslationKey, value: &str);

    /// Returns the effective value for `key`.
    ///
    /// Layers are consulted highest priority first, then the default. A key
    /// with no layer value and no default yields an empty string. Never fails.
    fn get_string(&self, key: &TranslationKey) -> String;

    /// Loads a configuration file layer if one exists at `path`.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The file was found and loaded
    /// * `Ok(false)` - There is no file at `path`
    /// * `Err(TranslationError)` - The file exists but could not be read or parsed
    fn load_optional_file(&mut self, path: &Path) -> Result<bool>;
}
