// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! These traits are the seams between the resolver and the outside world. They
//! are implemented by the adapters layer.

pub mod backend;
pub mod parser;
pub mod source;

// Re-export commonly used types
pub use backend::ConfigBackend;
pub use parser::ConfigParser;
pub use source::ConfigSource;
