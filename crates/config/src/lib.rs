//! Configuration loading, validation, and management for namedrecord.
//!
//! Loads configuration from `~/.namedrecord/config.toml` with environment
//! variable overrides. Validates all settings at startup.

use namedrecord_core::ReservedWords;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Log level names accepted in config and `LOG_LEVEL`, case-insensitive.
pub const LOG_LEVELS: &[&str] = &[
    "fatal", "error", "critical", "warn", "warning", "info", "notice", "debug", "trace",
];

/// The root configuration structure.
///
/// Maps directly to `~/.namedrecord/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Field naming configuration
    #[serde(default)]
    pub naming: NamingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log to stderr instead of the log file
    #[serde(default)]
    pub to_console: bool,

    #[serde(default = "default_log_file")]
    pub file: PathBuf,
}

fn default_log_level() -> String {
    "info".into()
}
fn default_log_file() -> PathBuf {
    PathBuf::from("namedrecord.log")
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            to_console: false,
            file: default_log_file(),
        }
    }
}

impl LoggingConfig {
    /// The `tracing` filter directive for the configured level.
    ///
    /// Folds the wider set of accepted names onto tracing's five levels:
    /// `fatal`/`critical` → `error`, `warning` → `warn`, `notice` → `info`.
    pub fn filter_directive(&self) -> Result<&'static str, ConfigError> {
        let level = self.level.trim().to_ascii_lowercase();
        let directive = match level.as_str() {
            "fatal" | "critical" | "error" => "error",
            "warn" | "warning" => "warn",
            "info" | "notice" => "info",
            "debug" => "debug",
            "trace" => "trace",
            _ => {
                return Err(ConfigError::ValidationError(format!(
                    "The specified logging level \"{}\" is invalid. Use one of: {}",
                    self.level,
                    LOG_LEVELS.join(", ")
                )));
            }
        };
        Ok(directive)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Which reserved-word table field names are checked against
    #[serde(default)]
    pub reserved_words: ReservedWords,

    /// Name fields automatically instead of prompting (CLI default)
    #[serde(default)]
    pub auto: bool,
}

impl AppConfig {
    /// Load configuration from the default path (~/.namedrecord/config.toml).
    ///
    /// Then applies environment overrides:
    /// - `NAMEDRECORD_LOG_LEVEL`, falling back to `LOG_LEVEL`
    /// - `NAMEDRECORD_LOG_TO_CONSOLE`, falling back to `LOG_TO_CONSOLE`
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::load_from(&Self::config_path())?;
        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides read through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let first = |keys: [&str; 2]| keys.into_iter().find_map(|k| lookup(k));

        if let Some(level) = first(["NAMEDRECORD_LOG_LEVEL", "LOG_LEVEL"]) {
            self.logging.level = level;
        }

        if let Some(flag) = first(["NAMEDRECORD_LOG_TO_CONSOLE", "LOG_TO_CONSOLE"]) {
            self.logging.to_console = parse_flag(&flag);
        }
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".namedrecord")
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.logging.filter_directive()?;

        if self.logging.file.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "logging.file must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Generate a default config TOML string (for `config init`).
    pub fn default_toml() -> Result<String, ConfigError> {
        Self::render_default(&Self::config_path())
    }

    fn render_default(path: &Path) -> Result<String, ConfigError> {
        toml::to_string_pretty(&Self::default()).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Write the default config to `path`, creating parent directories.
    /// Refuses to overwrite an existing file.
    pub fn write_default(path: &Path) -> Result<(), ConfigError> {
        let write_err = |reason: String| ConfigError::WriteError {
            path: path.to_path_buf(),
            reason,
        };

        if path.exists() {
            return Err(write_err("file already exists".into()));
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| write_err(e.to_string()))?;
        }
        let content = Self::render_default(path)?;
        std::fs::write(path, content).map_err(|e| write_err(e.to_string()))?;
        tracing::info!("Wrote default config to {}", path.display());
        Ok(())
    }
}

/// Any non-empty value other than `0`, `false`, `no`, or `off` is true.
fn parse_flag(value: &str) -> bool {
    let value = value.trim().to_ascii_lowercase();
    !(value.is_empty() || matches!(value.as_str(), "0" | "false" | "no" | "off"))
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Failed to write config file at {path}: {reason}")]
    WriteError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
