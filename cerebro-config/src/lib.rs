//! Shared configuration loader for the Cerebro dataset builder.
//!
//! `defaults/cerebro.default.toml` is embedded into every binary so that docs and runtime
//! behavior stay in sync. Applications layer user-specific files on top of those defaults via
//! [`Loader`] before deserializing into [`CerebroConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/cerebro.default.toml");

/// Top-level configuration consumed by Cerebro applications.
#[derive(Debug, Clone, Deserialize)]
pub struct CerebroConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// How the data folder is read.
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    pub extension: String,
    pub strict_manifest: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub pretty: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive in `tracing_subscriber::EnvFilter` syntax.
    pub filter: String,
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

    /// Apply a single key/value override (useful for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<CerebroConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<CerebroConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.input.extension, "yaml");
        assert!(!config.input.strict_manifest);
        assert!(!config.output.pretty);
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("output.pretty", true)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert!(config.output.pretty);
    }

    #[test]
    fn user_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[input]\nextension = \"yml\"").unwrap();

        let config = Loader::new().with_file(file.path()).build().expect("config to build");
        assert_eq!(config.input.extension, "yml");
        assert!(!config.input.strict_manifest);
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/cerebro.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn missing_required_file_fails() {
        assert!(Loader::new().with_file("/nonexistent/cerebro.toml").build().is_err());
    }
}
