// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing source and backend implementations.
//!
//! This module contains concrete implementations of the traits defined in the
//! ports layer: the environment and JSON file sources, the layered backend that
//! composes them, and an in-memory backend for tests.

pub mod env_var;
pub mod json_file;
pub mod layered;
pub mod memory;

pub use env_var::{EnvVarAdapter, ENV_PREFIX};
pub use json_file::{JsonFileAdapter, JsonParser};
pub use layered::LayeredBackend;
pub use memory::MemoryBackend;
