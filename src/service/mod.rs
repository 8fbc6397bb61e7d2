// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the resolvers.
//!
//! This module contains the overriding [`TranslationHelper`], the
//! [`NullTranslationHelper`], and the routine that writes resolutions to disk.

pub mod dump;
pub mod null_helper;
pub mod translation_helper;

// Re-export commonly used types
pub use dump::dump_translation_key_map;
pub use null_helper::{null_translation_helper, NullTranslationHelper};
pub use translation_helper::{
    translation_helper, TranslationHelper, TranslationHelperBuilder, CONFIG_FILE_NAME,
};
