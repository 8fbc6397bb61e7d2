// SPDX-License-Identifier: MIT OR Apache-2.0

//! The translation resolver.
//!
//! [`TranslationHelper`] resolves each key once, preferring an environment
//! override, then the JSON config file, then the caller's default, and remembers
//! every answer so it can be written back out with
//! [`finalize`](TranslationHelper::finalize).

use crate::adapters::{LayeredBackend, ENV_PREFIX};
use crate::domain::{Result, TranslationKey, TranslationMap, Translator};
use crate::ports::ConfigBackend;
use crate::service::dump_translation_key_map;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Name of the file overrides are read from and resolutions are written to.
pub const CONFIG_FILE_NAME: &str = "github-mcp-server-config.json";

/// Resolves translation keys and records the results.
///
/// Once a key has been resolved its value never changes for the lifetime of the
/// helper, regardless of later environment changes or the default passed on
/// later calls.
///
/// `resolve` takes `&mut self`; share a helper between threads only behind a
/// lock.
///
/// # Examples
///
/// ```rust
/// use mcp_translations::service::TranslationHelper;
///
/// # fn main() -> mcp_translations::domain::Result<()> {
/// let dir = tempfile::tempdir()?;
/// let mut helper = TranslationHelper::builder()
///     .config_dir(dir.path())
///     .env_prefix("DOC_EXAMPLE_PREFIX")
///     .build();
///
/// assert_eq!(helper.resolve("tool-description", "Does a thing"), "Does a thing");
/// assert_eq!(helper.resolve("TOOL_DESCRIPTION", "ignored"), "Does a thing");
///
/// helper.finalize()?;
/// # Ok(())
/// # }
/// ```
pub struct TranslationHelper<B: ConfigBackend = LayeredBackend> {
    /// Layered reader consulted on a cache miss
    backend: B,
    /// Every resolution made so far
    translations: TranslationMap,
    /// Where `finalize` writes
    output_path: PathBuf,
}

impl TranslationHelper {
    /// Creates a helper reading `github-mcp-server-config.json` from the current
    /// directory and `GITHUB_MCP_*` environment variables.
    ///
    /// A missing file is ignored. A malformed file is logged as a warning and
    /// otherwise ignored.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Creates a builder for a helper with a custom location or prefix.
    pub fn builder() -> TranslationHelperBuilder {
        TranslationHelperBuilder::new()
    }
}

impl Default for TranslationHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: ConfigBackend> TranslationHelper<B> {
    /// Creates a helper over a custom backend.
    ///
    /// The config file at `path` is offered to the backend once, and `finalize`
    /// writes to the same path.
    pub fn with_backend(mut backend: B, path: impl Into<PathBuf>) -> Self {
        let output_path = path.into();

        match backend.load_optional_file(&output_path) {
            Ok(true) => {
                tracing::debug!("Loaded translation overrides from {}", output_path.display())
            }
            Ok(false) => {}
            Err(e) => tracing::warn!(
                "Could not read JSON config {}: {}",
                output_path.display(),
                e
            ),
        }

        Self {
            backend,
            translations: TranslationMap::new(),
            output_path,
        }
    }

    /// Returns the effective value for `key`.
    ///
    /// The key is normalized first. A cached value is returned as-is; otherwise
    /// `default` is registered with the backend, the backend's answer is cached,
    /// and that answer is returned. Never fails.
    pub fn resolve(&mut self, key: &str, default: &str) -> String {
        let key = TranslationKey::from(key);
        if let Some(value) = self.translations.get(&key) {
            return value.to_string();
        }

        self.backend.set_default(&key, default);
        let resolved = self.backend.get_string(&key);
        self.translations.insert(key, resolved.clone());
        resolved
    }

    /// Returns every resolution made so far.
    pub fn translations(&self) -> &TranslationMap {
        &self.translations
    }

    /// Returns the path `finalize` writes to.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Returns the backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Writes every resolution made so far to the output path.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError::DumpError`](crate::domain::TranslationError::DumpError)
    /// if the file cannot be written. Callers that treat the dump as mandatory
    /// should abort on error.
    pub fn finalize(&self) -> Result<()> {
        dump_translation_key_map(&self.translations, &self.output_path)
    }

    /// Splits the helper into a resolution function and a finalize function
    /// sharing one cache.
    ///
    /// The functions are not `Send`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mcp_translations::adapters::MemoryBackend;
    /// use mcp_translations::service::TranslationHelper;
    ///
    /// let dir = tempfile::tempdir().unwrap();
    /// let backend = MemoryBackend::new().with_value("greeting", "hi");
    /// let helper = TranslationHelper::with_backend(backend, dir.path().join("out.json"));
    ///
    /// let (mut t, finalize) = helper.into_fns();
    /// assert_eq!(t("greeting", "hello"), "hi");
    /// finalize().unwrap();
    /// ```
    pub fn into_fns(self) -> (impl FnMut(&str, &str) -> String, impl FnOnce() -> Result<()>) {
        let shared = Rc::new(RefCell::new(self));
        let resolver = Rc::clone(&shared);

        let translate =
            move |key: &str, default: &str| resolver.borrow_mut().resolve(key, default);
        let finalize = move || {
            let result = shared.borrow().finalize();
            result
        };

        (translate, finalize)
    }
}

impl<B: ConfigBackend> Translator for TranslationHelper<B> {
    fn translate(&mut self, key: &str, default: &str) -> String {
        self.resolve(key, default)
    }
}

/// Creates the default helper and returns its resolution and finalize
/// functions.
///
/// Equivalent to `TranslationHelper::new().into_fns()`.
pub fn translation_helper() -> (impl FnMut(&str, &str) -> String, impl FnOnce() -> Result<()>) {
    TranslationHelper::new().into_fns()
}

/// Builder for a [`TranslationHelper`] over the environment/file backend.
///
/// # Examples
///
/// ```rust
/// use mcp_translations::service::TranslationHelperBuilder;
///
/// let builder = TranslationHelperBuilder::new()
///     .config_dir("/etc/github-mcp")
///     .file_name("overrides.json")
///     .env_prefix("MY_SERVER");
///
/// assert_eq!(
///     builder.config_path(),
///     std::path::Path::new("/etc/github-mcp/overrides.json")
/// );
/// ```
#[derive(Debug, Clone)]
pub struct TranslationHelperBuilder {
    config_dir: PathBuf,
    file_name: String,
    env_prefix: String,
}

impl TranslationHelperBuilder {
    /// Creates a builder for the current directory, `github-mcp-server-config.json`
    /// and the `GITHUB_MCP` prefix.
    pub fn new() -> Self {
        Self {
            config_dir: PathBuf::from("."),
            file_name: CONFIG_FILE_NAME.to_string(),
            env_prefix: ENV_PREFIX.to_string(),
        }
    }

    /// Sets the directory the config file is read from and written to.
    pub fn config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = dir.into();
        self
    }

    /// Sets the config file name.
    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = name.into();
        self
    }

    /// Sets the environment variable prefix.
    pub fn env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Returns the full path of the config file.
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join(&self.file_name)
    }

    /// Builds the helper, loading the config file if present.
    ///
    /// Never fails; a malformed config file is logged and ignored.
    pub fn build(self) -> TranslationHelper {
        let path = self.config_path();
        TranslationHelper::with_backend(LayeredBackend::with_env_prefix(self.env_prefix), path)
    }
}

impl Default for TranslationHelperBuilder {
    fn default() -> Self {
        Self::new()
    }
}
