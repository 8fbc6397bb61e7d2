// SPDX-License-Identifier: MIT OR Apache-2.0

//! A translator that never overrides anything.

use crate::domain::Translator;

/// Returns `default` unchanged, ignoring the key, environment and file.
///
/// Usable anywhere a `Translator` is expected.
///
/// # Examples
///
/// ```rust
/// use mcp_translations::service::null_translation_helper;
///
/// assert_eq!(null_translation_helper("tool-description", "Does a thing"), "Does a thing");
/// ```
pub fn null_translation_helper(_key: &str, default: &str) -> String {
    default.to_string()
}

/// A `Translator` for call sites where overrides are not wanted.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTranslationHelper;

impl Translator for NullTranslationHelper {
    fn translate(&mut self, key: &str, default: &str) -> String {
        null_translation_helper(key, default)
    }
}
