//! # TARDIS-em
//!
//! Transformer And Rapid Dimensionless Instance Segmentation.
//!
//! This crate is the package entry point of the toolkit: it prepares the
//! process environment, wires up project-wide logging and exposes the
//! constants shared by the command-line front ends.
//!
//! ## Initialization
//!
//! [`init()`] should run at the top of `main`, before any threads are
//! spawned; it is `unsafe` because it writes the process environment. It
//!
//! 1. sets `PYTORCH_ENABLE_MPS_FALLBACK=1` so that operations the Metal
//!    backend lacks fall back to the CPU instead of failing;
//! 2. configures the `tardis_em` logger (console plus a timestamped file in
//!    `~/.tardis_em/logs`, overridable through `TARDIS_LOG_*` variables);
//! 3. logs `TARDIS initialized`.
//!
//! ## Modules
//!
//! - **`logging`**: `configure_tardis_logging`, `set_log_level`, `get_logger`.
//! - **`formats`**: the `<input>_<output>` format choices.
//! - **`shell`**: the `tardis_em` command-line interface.

pub mod formats;
pub mod logging;
pub mod shell;

pub use formats::{FormatChoice, FormatChoiceError, format_choices};
pub use logging::{ROOT_LOGGER, configure_tardis_logging, get_logger, set_log_level};
pub use tardis_log::{Logger, LoggingConfig, LoggingError};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lets PyTorch run operations unsupported on Apple's MPS backend on the CPU.
pub const MPS_FALLBACK_ENV: &str = "PYTORCH_ENABLE_MPS_FALLBACK";

/// Sets [`MPS_FALLBACK_ENV`] to `1`.
///
/// # Safety
///
/// Mutates the process environment; no other thread may read or write
/// environment variables concurrently.
pub unsafe fn enable_mps_fallback() {
    // SAFETY: upheld by the caller.
    unsafe { std::env::set_var(MPS_FALLBACK_ENV, "1") };
}

/// Initializes the process for TARDIS-em with logging taken from the
/// `TARDIS_LOG_*` environment variables.
///
/// The MPS fallback flag is set before the logging settings are read, so it
/// is in place even when those settings are rejected.
///
/// # Safety
///
/// Mutates the process environment; see [`enable_mps_fallback`]. Call it first
/// thing in `main`, before any other thread is spawned.
pub unsafe fn init() -> tardis_log::Result<Logger> {
    // SAFETY: upheld by the caller.
    unsafe { enable_mps_fallback() };
    start(LoggingConfig::default().with_env_overrides()?)
}

/// Sets the MPS fallback flag, then configures logging from `config`.
///
/// # Safety
///
/// Same contract as [`init`].
pub unsafe fn init_with(config: LoggingConfig) -> tardis_log::Result<Logger> {
    // SAFETY: upheld by the caller.
    unsafe { enable_mps_fallback() };
    start(config)
}

/// Configures the `tardis_em` logger from `config` and logs the startup
/// message. Leaves the environment alone; pair it with
/// [`enable_mps_fallback`] at the top of `main`.
pub fn start(config: LoggingConfig) -> tardis_log::Result<Logger> {
    let logger = configure_tardis_logging(&config)?;
    logger.info("TARDIS initialized");
    Ok(logger)
}
