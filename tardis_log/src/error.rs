use std::path::PathBuf;
use tracing_appender::rolling::InitError;

/// Errors raised while configuring loggers and their handlers.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Cannot determine the home directory for the default log location")]
    HomeDirUnavailable,

    #[error("Failed to create log directory '{path:?}': {source}")]
    CreateLogDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Log file path '{path:?}' does not name a file")]
    InvalidLogFile { path: PathBuf },

    #[error("Failed to open log file '{path:?}': {source}")]
    OpenLogFile {
        path: PathBuf,
        #[source]
        source: InitError,
    },

    #[error("Unknown log level '{0}' (expected trace, debug, info, warn, error or off)")]
    InvalidLevel(String),

    #[error("Environment variable {name} has a non-boolean value '{value}'")]
    InvalidFlag { name: String, value: String },

    #[error("Failed to read logging config '{path:?}': {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid logging config: {0}")]
    ParseConfig(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, LoggingError>;
