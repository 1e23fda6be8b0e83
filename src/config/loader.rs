//! Configuration loading utilities
//!
//! Nothing here logs: loading runs before the subscriber is installed, so
//! errors are handed back to the caller to report.

use crate::{Error, Result, config::Settings};
use std::path::Path;

/// Configuration loader with multiple source support
#[derive(Debug)]
pub struct ConfigLoader {
    /// Default settings
    defaults: Settings,
}

impl ConfigLoader {
    /// Create new configuration loader
    pub fn new() -> Self {
        Self {
            defaults: Settings::default(),
        }
    }

    /// Load and validate settings
    ///
    /// Environment variables override the file, which replaces the defaults.
    /// A file that was asked for but cannot be read is an error.
    pub fn load(&self, config_file: Option<&Path>) -> Result<Settings> {
        let base = match config_file {
            Some(path) => Settings::from_file(path)?,
            None => self.defaults.clone(),
        };

        let settings = base.merge_with_env()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load configuration from environment only
    pub fn from_env_only(&self) -> Result<Settings> {
        self.load(None)
    }

    /// Same as [`ConfigLoader::load`], but falls back to the defaults
    ///
    /// The error that caused the fallback is returned next to the settings.
    pub fn load_or_defaults(&self, config_file: Option<&Path>) -> (Settings, Option<Error>) {
        match self.load(config_file) {
            Ok(settings) => (settings, None),
            Err(e) => (self.defaults.clone(), Some(e)),
        }
    }

    /// Get default configuration
    pub fn defaults(&self) -> &Settings {
        &self.defaults
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_defaults() {
        let loader = ConfigLoader::new();
        assert_eq!(loader.defaults().logging.level, "error");
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[logging]
level = "info"
verbose = true
        "#
        )
        .unwrap();

        let settings = Settings::from_file(temp_file.path()).unwrap();

        assert_eq!(settings.logging.level, "info");
        assert!(settings.logging.verbose);
    }

    #[test]
    fn test_load_from_malformed_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "[logging\nlevel = ").unwrap();

        let err = Settings::from_file(temp_file.path()).unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_load_rejects_invalid_level_in_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "[logging]\nlevel = \"chatty\"").unwrap();

        let loader = ConfigLoader::new();
        let err = loader.load(Some(temp_file.path())).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_or_defaults_reports_missing_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.toml");

        let loader = ConfigLoader::new();
        let (settings, err) = loader.load_or_defaults(Some(&missing));

        assert_eq!(&settings, loader.defaults());
        let err = err.expect("missing file should be reported");
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("missing.toml"));
    }
}
