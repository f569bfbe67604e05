//! # TARDIS Logging
//!
//! Centralized, name-keyed logging for the TARDIS-em workspace.
//!
//! ## Core Concepts
//!
//! - **`LoggerRegistry`**: a table of named loggers forming a dotted hierarchy.
//!   A single process-wide instance is available through [`registry::global`].
//! - **`Logger`**: a handle to one entry. Records sent through it are checked
//!   against the effective level and written by the handlers of the logger and
//!   of its ancestors until propagation stops.
//! - **`Handler`**: a console (stdout), file or stream sink with its own level.
//!   Every handler writes the same line format:
//!   `2025-03-07 09:05:01 - tardis_em - INFO - message`.
//! - **`RegistryLayer`**: a `tracing_subscriber` layer that routes `tracing`
//!   events into the registry, keyed by the event target.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tardis_log::{LoggerOptions, install_global, setup_logger};
//! use tracing::level_filters::LevelFilter;
//!
//! let logger = setup_logger(
//!     &LoggerOptions::named("tardis_em").with_level(LevelFilter::DEBUG),
//! )?;
//! install_global();
//! logger.info("ready");
//! tracing::debug!(target: "tardis_em::io", "also routed to tardis_em");
//! # Ok::<(), tardis_log::LoggingError>(())
//! ```
//!
//! Without an explicit `log_file`, the file handler writes to
//! `~/.tardis_em/logs/tardis_<YYYYmmdd_HHMMSS>.log`.

pub mod config;
pub mod error;
pub mod format;
pub mod handler;
pub mod layer;
pub mod paths;
pub mod registry;

pub use config::{LoggerOptions, LoggingConfig, level_to_str, parse_level};
pub use error::{LoggingError, Result};
pub use handler::{Handler, HandlerKind};
pub use layer::{RegistryLayer, install_global};
pub use registry::{Logger, LoggerRegistry, get_logger, global, setup_logger};
