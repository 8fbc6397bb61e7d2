// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! This module contains the types every other layer speaks in: normalized keys,
//! the resolution cache, the `Translator` abstraction and the error type. It has
//! no knowledge of where values come from.

pub mod errors;
pub mod translation_key;
pub mod translation_map;
pub mod translator;

// Re-export commonly used types
pub use errors::{Result, TranslationError};
pub use translation_key::TranslationKey;
pub use translation_map::TranslationMap;
pub use translator::Translator;
