//! Shared configuration loader for the vitrine toolkit.
//!
//! `defaults/vitrine.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files
//! on top of those defaults via [`Loader`] before deserializing into
//! [`VitrineConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/vitrine.default.toml");

/// Top-level configuration consumed by vitrine applications.
#[derive(Debug, Clone, Deserialize)]
pub struct VitrineConfig {
    pub styleguide: StyleguideConfig,
}

/// Knobs of the styleguide discovery and view layers.
#[derive(Debug, Clone, Deserialize)]
pub struct StyleguideConfig {
    /// Reserved directory searched for inside every template root.
    pub dir_name: String,
    /// Reserved per-folder doc file; never listed as a component.
    pub docfile_name: String,
    /// Top-level folders that never become modules.
    pub ignore_folders: Vec<String>,
    /// Only files with this extension become components.
    pub template_extension: String,
    /// Bypass the guide cache entirely.
    pub debug: bool,
    /// Cache entry name the built guide is stored under.
    pub cache_name: String,
    /// Base path the link resolver roots all styleguide URLs at.
    pub link_base: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<VitrineConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<VitrineConfig, ConfigError> {
    Loader::new().build()
}
