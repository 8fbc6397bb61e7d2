// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `Translator` trait.
//!
//! Call sites that build user-facing strings take a `Translator` rather than a
//! concrete resolver, so the same code works with the overriding
//! [`TranslationHelper`](crate::service::TranslationHelper), the
//! [`NullTranslationHelper`](crate::service::NullTranslationHelper), or a plain
//! closure.

/// Turns a key and a default string into the string that should be used.
///
/// Implementations never fail: when nothing overrides the key, the default is
/// returned.
///
/// Any `FnMut(&str, &str) -> String` is a `Translator`.
///
/// # Examples
///
/// ```rust
/// use mcp_translations::domain::Translator;
///
/// fn describe(t: &mut impl Translator) -> String {
///     t.translate("tool-get-me-description", "Get details of the authenticated user")
/// }
///
/// let mut shout = |_: &str, default: &str| default.to_uppercase();
/// assert_eq!(describe(&mut shout), "GET DETAILS OF THE AUTHENTICATED USER");
/// ```
pub trait Translator {
    /// Returns the effective value for `key`, falling back to `default`.
    fn translate(&mut self, key: &str, default: &str) -> String;
}

impl<F> Translator for F
where
    F: FnMut(&str, &str) -> String,
{
    fn translate(&mut self, key: &str, default: &str) -> String {
        self(key, default)
    }
}
