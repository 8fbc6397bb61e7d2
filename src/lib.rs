// SPDX-License-Identifier: MIT OR Apache-2.0

//! Overridable user-facing strings for an MCP server.
//!
//! Tool descriptions and similar strings are written in code with a default
//! value and a key. At startup each key is resolved once: an environment
//! variable `GITHUB_MCP_<KEY>` wins, then an entry in
//! `github-mcp-server-config.json` in the working directory, then the default.
//! Every resolution is remembered, and the full set can be written back to the
//! same file so operators can see (and edit) every string the server uses.
//!
//! Keys are normalized to upper snake case: `tool-description`,
//! `Tool-Description` and `TOOL_DESCRIPTION` are the same key.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`TranslationKey`, `TranslationMap`, `Translator`, errors)
//! - **Ports**: Trait definitions (`ConfigSource`, `ConfigParser`, `ConfigBackend`)
//! - **Adapters**: Environment and JSON file sources, the layered and in-memory backends
//! - **Service**: The resolvers and the dump routine
//!
//! # Feature Flags
//!
//! - `cli`: Build the `mcp-translations` command (default)
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mcp_translations::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let mut helper = TranslationHelper::new();
//!
//! let description = helper.resolve(
//!     "tool-get-me-description",
//!     "Get details of the authenticated GitHub user",
//! );
//! println!("{}", description);
//!
//! // Write every resolved string to github-mcp-server-config.json
//! helper.finalize()?;
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{EnvVarAdapter, JsonFileAdapter, LayeredBackend, MemoryBackend};
    pub use crate::domain::{Result, TranslationError, TranslationKey, TranslationMap, Translator};
    pub use crate::ports::{ConfigBackend, ConfigParser, ConfigSource};
    pub use crate::service::{
        null_translation_helper, translation_helper, NullTranslationHelper, TranslationHelper,
        TranslationHelperBuilder,
    };
}
