//! Configuration settings structure

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable overriding the log level
pub const ENV_LOG_LEVEL: &str = "APP_LOG_LEVEL";
/// Environment variable enabling verbose logging
pub const ENV_VERBOSE: &str = "APP_VERBOSE";

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Main configuration settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Logging configuration
    pub logging: LoggingSettings,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level
    pub level: String,
    /// Enable verbose logging
    pub verbose: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "error".to_string(),
            verbose: false,
        }
    }
}

impl Settings {
    /// Create new settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from environment variables
    pub fn from_env() -> Result<Self> {
        Self::default().merge_with_env()
    }

    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read {}: {}", path.display(), e)))?;
        Ok(toml::from_str(&content)?)
    }

    /// Override fields with values from the process environment
    pub fn merge_with_env(self) -> Result<Self> {
        self.merge_with(|key| std::env::var(key).ok())
    }

    /// Override fields with values returned by `lookup`
    pub fn merge_with<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = level.trim().to_ascii_lowercase();
        }

        if let Some(verbose) = lookup(ENV_VERBOSE) {
            self.logging.verbose = parse_bool(&verbose)
                .ok_or_else(|| Error::config(format!("Invalid {}: {}", ENV_VERBOSE, verbose)))?;
        }

        Ok(self)
    }

    /// Check that every field holds a usable value
    pub fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(Error::config(format!(
                "Invalid log level: {} (expected one of {})",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
