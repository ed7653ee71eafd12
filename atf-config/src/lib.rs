//! Settings for the ATF parser, merge and output.
//!
//! The defaults live in `defaults/atf.default.toml`, embedded at compile time, and document every
//! key. [`Loader`] layers user TOML files and command line overrides on top of them and
//! deserializes the result into [`AtfConfig`].

use atf_parser::atf::merging::DiffAlgorithm;
use atf_parser::ParserOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/atf.default.toml");

/// Top-level configuration consumed by ATF applications.
#[derive(Debug, Clone, Deserialize)]
pub struct AtfConfig {
    pub parser: ParserOptions,
    pub merge: MergeConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MergeConfig {
    pub algorithm: DiffAlgorithm,
}

/// How parsed texts are printed.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Json,
    Yaml,
    Atf,
}

/// Layers ATF settings: the embedded defaults first, then any user files in the order they were
/// added, then single-key overrides such as `merge.algorithm` from the command line.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        Self {
            builder: Config::builder().add_source(defaults),
        }
    }

    /// Add a TOML settings file that must exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.with_source(path.as_ref(), true)
    }

    /// Add a TOML settings file, skipped when absent (e.g. a per-project `atf.toml`).
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.with_source(path.as_ref(), false)
    }

    fn with_source(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Override one dotted key, e.g. `output.format`. Values are checked when [`Loader::build`]
    /// deserializes them.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<AtfConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The built-in settings, without any user file.
pub fn load_defaults() -> Result<AtfConfig, ConfigError> {
    Loader::new().build()
}
