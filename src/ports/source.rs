// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration source trait definition.
//!
//! A `ConfigSource` is one place an override can come from (environment
//! variables, a JSON file). The layered backend queries its sources in priority
//! order.

use crate::domain::{Result, TranslationKey};

/// A trait for translation override sources.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a backend holding boxed sources can
/// be moved across threads.
///
/// # Priority
///
/// Higher priority values take precedence over lower ones:
///
/// - **2**: Environment variables
/// - **1**: Configuration files
///
/// # Examples
///
/// ```rust
/// use mcp_translations::domain::{Result, TranslationKey};
/// use mcp_translations::ports::ConfigSource;
///
/// struct Fixed;
///
/// impl ConfigSource for Fixed {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn priority(&self) -> u8 {
///         1
///     }
///
///     fn get(&self, key: &TranslationKey) -> Result<Option<String>> {
///         Ok((key.as_str() == "GREETING").then(|| "hello".to_string()))
///     }
///
///     fn all_keys(&self) -> Result<Vec<TranslationKey>> {
///         Ok(vec![TranslationKey::from("greeting")])
///     }
/// }
///
/// let source = Fixed;
/// assert_eq!(source.get_str("greeting").unwrap().as_deref(), Some("hello"));
/// ```
pub trait ConfigSource: Send + Sync {
    /// Returns the name of this source, used in logs and error messages.
    fn name(&self) -> &str;

    /// Returns the priority of this source. Higher values win.
    fn priority(&self) -> u8;

    /// Retrieves the override for the given key.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(value))` - The source overrides this key
    /// * `Ok(None)` - The source has nothing for this key
    /// * `Err(TranslationError)` - The source could not be read
    fn get(&self, key: &TranslationKey) -> Result<Option<String>>;

    /// Returns every key this source can override.
    fn all_keys(&self) -> Result<Vec<TranslationKey>>;

    /// Retrieves the override for an un-normalized key string.
    ///
    /// Equivalent to `get(&TranslationKey::from(key))`.
    fn get_str(&self, key: &str) -> Result<Option<String>> {
        self.get(&TranslationKey::from(key))
    }
}
