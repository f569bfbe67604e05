//! # Shell Module
//!
//! Argument parsing and command dispatch for the `tardis_em` binary.

pub mod cli;

pub use cli::{Cli, Command, execute, resolve_logging_config, run};
