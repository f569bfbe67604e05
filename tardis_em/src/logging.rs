//! # Logging Initialization
//!
//! Project-wide logging for TARDIS-em. All TARDIS loggers hang below the
//! `tardis_em` logger, which owns the handlers; module loggers inherit its
//! level and forward to it.
//!
//! - **`configure_tardis_logging()`**: call once near the start of the program.
//!   Calling it again replaces the previous handlers instead of adding to them.
//! - **`set_log_level()`**: adjust verbosity of `tardis_em` and its handlers at runtime.
//! - **`get_logger()`**: handle for a module logger, e.g. `get_logger(module_path!())`.
//!
//! `tracing` events from `tardis_em::*` targets are routed to the same loggers.

use tardis_log::{Logger, LoggingConfig, Result, install_global, registry};
use tracing::level_filters::LevelFilter;

/// Name of the logger that owns the TARDIS handlers.
pub const ROOT_LOGGER: &str = "tardis_em";

/// Configures the `tardis_em` logger from `config` and announces it.
///
/// # Errors
///
/// Returns an error if the log directory or the log file cannot be created.
pub fn configure_tardis_logging(config: &LoggingConfig) -> Result<Logger> {
    let logger = registry::setup_logger(&config.to_options(ROOT_LOGGER))?;
    install_global();
    logger.info("TARDIS-em logging initialized");
    Ok(logger)
}

/// Sets the level of the `tardis_em` logger and every handler attached to it.
pub fn set_log_level(level: LevelFilter) {
    registry::global().set_level_recursive(ROOT_LOGGER, level);
}

pub fn get_logger(name: &str) -> Logger {
    registry::get_logger(name)
}
