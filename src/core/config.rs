//! Logger configuration
//!
//! `LoggerConfig` decides how the process-wide registry builds its default
//! backend and where named file loggers keep their files. It deserializes
//! with serde (every field optional) and can be overridden from the
//! environment:
//!
//! - `TERMLOG_LEVEL`: minimum level (`trace`, `debug`, `info`, `warn`, `error`, `fatal`)
//! - `TERMLOG_LOG_DIR`: directory for `<name>.log` files
//! - `NO_COLOR`: any non-empty value turns colors off

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const ENV_LEVEL: &str = "TERMLOG_LEVEL";
pub const ENV_LOG_DIR: &str = "TERMLOG_LOG_DIR";
pub const ENV_NO_COLOR: &str = "NO_COLOR";

/// Directory used for file loggers when nothing else is configured
pub const DEFAULT_LOG_DIR: &str = ".termlog/logs";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Minimum level for the default stdout backend and file loggers
    pub level: LogLevel,
    /// Colorize console output
    pub use_colors: bool,
    /// Directory that holds named file loggers
    pub log_dir: PathBuf,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Debug,
            use_colors: true,
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
        }
    }
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    #[must_use]
    pub fn with_log_dir(mut self, log_dir: impl Into<PathBuf>) -> Self {
        self.log_dir = log_dir.into();
        self
    }

    /// Default configuration with environment overrides applied
    pub fn from_env() -> Result<Self> {
        Self::default().apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    ///
    /// Unset or empty values keep the current setting.
    ///
    /// # Example
    ///
    /// ```
    /// use termlog::{LogLevel, LoggerConfig};
    ///
    /// let config = LoggerConfig::default()
    ///     .apply_overrides(|key| (key == "TERMLOG_LEVEL").then(|| "warn".to_string()))
    ///     .unwrap();
    /// assert_eq!(config.level, LogLevel::Warn);
    /// ```
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(level) = non_empty(ENV_LEVEL) {
            self.level = level
                .parse()
                .map_err(|message: String| LoggerError::config(ENV_LEVEL, message))?;
        }

        if let Some(dir) = non_empty(ENV_LOG_DIR) {
            self.log_dir = PathBuf::from(dir);
        }

        if non_empty(ENV_NO_COLOR).is_some() {
            self.use_colors = false;
        }

        Ok(self)
    }
}
