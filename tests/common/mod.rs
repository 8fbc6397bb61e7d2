// SPDX-License-Identifier: MIT OR Apache-2.0

//! Helper utilities shared by the integration tests.

use mcp_translations::service::{TranslationHelper, CONFIG_FILE_NAME};
use std::env;
use std::path::{Path, PathBuf};

/// Sets environment variables and removes them again on drop.
///
/// Each test should use variable names no other test touches, since tests run
/// in parallel within one process.
pub struct EnvGuard {
    keys: Vec<String>,
}

impl EnvGuard {
    pub fn new() -> Self {
        EnvGuard { keys: Vec::new() }
    }

    pub fn set(&mut self, key: &str, value: &str) {
        env::set_var(key, value);
        self.keys.push(key.to_string());
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for key in &self.keys {
            env::remove_var(key);
        }
    }
}

/// Writes `content` as the config file in `dir` and returns its path.
#[allow(dead_code)]
pub fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join(CONFIG_FILE_NAME);
    std::fs::write(&path, content).unwrap();
    path
}

/// Builds a helper reading `dir` and the `GITHUB_MCP` prefix.
pub fn helper_in(dir: &Path) -> TranslationHelper {
    TranslationHelper::builder().config_dir(dir).build()
}
