//! # Logging Configuration
//!
//! - **`LoggerOptions`**: everything `setup_logger` needs for one named logger.
//! - **`LoggingConfig`**: the serializable, name-less part of the options. It is
//!   read from a flat TOML file and can be overridden from the environment:
//!
//! | Variable             | Field            |
//! |----------------------|------------------|
//! | `TARDIS_LOG_LEVEL`   | `level`          |
//! | `TARDIS_LOG_FILE`    | `log_file`       |
//! | `TARDIS_LOG_CONSOLE` | `console_output` |
//! | `TARDIS_LOG_TO_FILE` | `file_output`    |

use crate::error::{LoggingError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;

pub const ENV_LEVEL: &str = "TARDIS_LOG_LEVEL";
pub const ENV_LOG_FILE: &str = "TARDIS_LOG_FILE";
pub const ENV_CONSOLE: &str = "TARDIS_LOG_CONSOLE";
pub const ENV_TO_FILE: &str = "TARDIS_LOG_TO_FILE";

/// Options for configuring a single logger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerOptions {
    /// Logger name; `None` configures the root logger.
    pub name: Option<String>,
    pub level: LevelFilter,
    /// Explicit log file; `None` uses the timestamped default location.
    pub log_file: Option<PathBuf>,
    pub console_output: bool,
    pub file_output: bool,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            name: None,
            level: LevelFilter::INFO,
            log_file: None,
            console_output: true,
            file_output: true,
        }
    }
}

impl LoggerOptions {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    pub fn with_console_output(mut self, enabled: bool) -> Self {
        self.console_output = enabled;
        self
    }

    pub fn with_file_output(mut self, enabled: bool) -> Self {
        self.file_output = enabled;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    #[serde(with = "level_name")]
    pub level: LevelFilter,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    pub console_output: bool,
    pub file_output: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::INFO,
            log_file: None,
            console_output: true,
            file_output: true,
        }
    }
}

impl LoggingConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| LoggingError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Applies the `TARDIS_LOG_*` environment variables on top of `self`.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides_from(|name| std::env::var(name).ok())
    }

    /// Applies overrides from an arbitrary variable lookup. Empty values are ignored.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(level) = get(ENV_LEVEL) {
            self.level = parse_level(&level)?;
        }
        if let Some(path) = get(ENV_LOG_FILE) {
            self.log_file = Some(PathBuf::from(path.trim()));
        }
        if let Some(value) = get(ENV_CONSOLE) {
            self.console_output = parse_flag(ENV_CONSOLE, &value)?;
        }
        if let Some(value) = get(ENV_TO_FILE) {
            self.file_output = parse_flag(ENV_TO_FILE, &value)?;
        }
        Ok(self)
    }

    pub fn to_options(&self, name: impl Into<String>) -> LoggerOptions {
        LoggerOptions {
            name: Some(name.into()),
            level: self.level,
            log_file: self.log_file.clone(),
            console_output: self.console_output,
            file_output: self.file_output,
        }
    }
}

/// Parses a level name. Besides the `tracing` names this accepts `warning`
/// and `critical`, and `off` to silence a logger entirely.
pub fn parse_level(value: &str) -> Result<LevelFilter> {
    match value.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok(LevelFilter::TRACE),
        "debug" => Ok(LevelFilter::DEBUG),
        "info" => Ok(LevelFilter::INFO),
        "warn" | "warning" => Ok(LevelFilter::WARN),
        "error" | "critical" => Ok(LevelFilter::ERROR),
        "off" => Ok(LevelFilter::OFF),
        _ => Err(LoggingError::InvalidLevel(value.to_string())),
    }
}

/// Lower-case name accepted back by [`parse_level`].
pub fn level_to_str(level: LevelFilter) -> &'static str {
    [
        (LevelFilter::TRACE, "trace"),
        (LevelFilter::DEBUG, "debug"),
        (LevelFilter::INFO, "info"),
        (LevelFilter::WARN, "warn"),
        (LevelFilter::ERROR, "error"),
    ]
    .into_iter()
    .find_map(|(candidate, name)| (candidate == level).then_some(name))
    .unwrap_or("off")
}

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(LoggingError::InvalidFlag {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}

mod level_name {
    use super::{level_to_str, parse_level};
    use serde::{Deserialize, Deserializer, Serializer};
    use tracing::level_filters::LevelFilter;

    pub fn serialize<S>(level: &LevelFilter, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(level_to_str(*level))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<LevelFilter, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_level(&s).map_err(serde::de::Error::custom)
    }
}
