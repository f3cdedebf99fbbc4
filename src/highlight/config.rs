//! Configuration loading
//!
//! Layers, lowest priority first:
//!
//!     1. `defaults/highlight.default.toml`, embedded in the binary
//!     2. TOML files, in the order they were added
//!     3. environment variables, e.g. `PIYATHON_HL_OUTPUT__FORMAT=json`
//!        (`__` separates table and key)
//!     4. explicit overrides
//!
//! Relative `engine.grammar_files` entries are resolved against the directory of the last
//! file layered. Grammar files added with [Loader::with_grammar_file] come after the
//! configured ones.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../../defaults/highlight.default.toml");

/// Prefix of the environment variables read by default
pub const ENV_PREFIX: &str = "PIYATHON_HL";

#[derive(Debug, Clone, Deserialize)]
pub struct HighlightConfig {
    pub engine: EngineConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Language used when neither a name nor the file extension picks one
    pub default_language: String,
    /// Reject grammar files that fail [validate](crate::highlight::GrammarDescriptor::validate)
    pub validate_grammars: bool,
    pub grammar_files: Vec<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: String,
}

#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
    env_prefix: String,
    base_dir: Option<PathBuf>,
    grammar_files: Vec<PathBuf>,
}

impl Loader {
    pub fn new() -> Self {
        Loader {
            builder: Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
            env_prefix: ENV_PREFIX.to_string(),
            base_dir: None,
            grammar_files: Vec::new(),
        }
    }

    /// Layer a TOML file that must exist
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    /// Layer a TOML file if it exists
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        if required || path.is_file() {
            self.base_dir = path.parent().map(Path::to_path_buf);
        }
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Read environment variables starting with `prefix` instead of [ENV_PREFIX]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = prefix.to_string();
        self
    }

    /// Register one more grammar file after `engine.grammar_files`
    pub fn with_grammar_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.grammar_files.push(path.into());
        self
    }

    /// Select the dump format, above every other layer
    pub fn with_format(self, format: &str) -> Result<Self, ConfigError> {
        self.set_override("output.format", format)
    }

    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<HighlightConfig, ConfigError> {
        let environment = Environment::with_prefix(&self.env_prefix)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true);
        let mut config: HighlightConfig = self
            .builder
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        if config.engine.default_language.trim().is_empty() {
            return Err(ConfigError::Message(
                "engine.default_language must not be empty".to_string(),
            ));
        }
        if let Some(base) = &self.base_dir {
            for path in &mut config.engine.grammar_files {
                if path.is_relative() {
                    *path = base.join(&*path);
                }
            }
        }
        config.engine.grammar_files.extend(self.grammar_files);

        tracing::debug!(
            default_language = %config.engine.default_language,
            format = %config.output.format,
            grammar_files = config.engine.grammar_files.len(),
            "configuration loaded"
        );
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults, plus environment variables
pub fn load_defaults() -> Result<HighlightConfig, ConfigError> {
    Loader::new().build()
}
