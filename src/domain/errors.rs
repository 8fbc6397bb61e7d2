// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the translations crate.
//!
//! Resolution itself never fails; these errors surface from the sources while
//! they are being read (and are absorbed by the backend) and from writing the
//! resolved translations back to disk.

use thiserror::Error;

/// The main error type for translation operations.
///
/// Marked `#[non_exhaustive]` to allow for future additions without breaking
/// backwards compatibility.
///
/// # Examples
///
/// ```
/// use mcp_translations::domain::errors::TranslationError;
///
/// fn dump() -> Result<(), TranslationError> {
///     Err(TranslationError::DumpError {
///         message: "disk full".to_string(),
///         source: None,
///     })
/// }
///
/// assert!(dump().is_err());
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TranslationError {
    /// An error occurred in a configuration source.
    #[error("Translation source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to parse a configuration file.
    #[error("Failed to parse translations: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to write the resolved translations to disk.
    #[error("Could not dump translation key map: {message}")]
    DumpError {
        /// The error message
        message: String,
        /// The underlying error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// A specialized Result type for translation operations.
pub type Result<T> = std::result::Result<T, TranslationError>;
