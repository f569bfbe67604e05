//! # TARDIS-em CLI
//!
//! Command-line definition and entry point of the `tardis_em` binary.

use crate::formats::{FormatChoice, format_choices};
use crate::{ROOT_LOGGER, VERSION, get_logger, start};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tardis_log::{LoggingConfig, level_to_str, parse_level, paths};

/// TARDIS-em: Transformer And Rapid Dimensionless Instance Segmentation.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Cli {
    /// Log level: trace, debug, info, warn (warning), error (critical) or off
    #[arg(long)]
    pub log_level: Option<String>,

    /// Shorthand for --log-level debug
    #[arg(long)]
    pub debug: bool,

    /// Write the log to this file instead of ~/.tardis_em/logs/tardis_<timestamp>.log
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Do not log to stdout
    #[arg(long)]
    pub no_console: bool,

    /// Do not log to a file
    #[arg(long)]
    pub no_file_log: bool,

    /// TOML file with logging settings (level, log_file, console_output, file_output)
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List every supported <input>_<output> format choice
    Formats,
    /// Validate a format choice
    Check {
        /// Choice such as mrc_csv
        choice: String,
    },
    /// Print the default log directory
    LogDir,
    /// Print version and logging state
    Info,
}

/// Builds the logging configuration with precedence flags > environment > file > defaults.
pub fn resolve_logging_config<F>(cli: &Cli, lookup: F) -> Result<LoggingConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let config = match &cli.config {
        Some(path) => LoggingConfig::load_from_file(path)?,
        None => LoggingConfig::default(),
    };
    let mut config = config.with_overrides_from(lookup)?;

    if cli.debug {
        config.level = tracing::level_filters::LevelFilter::DEBUG;
    }
    if let Some(level) = &cli.log_level {
        config.level = parse_level(level)?;
    }
    if let Some(path) = &cli.log_file {
        config.log_file = Some(path.clone());
    }
    if cli.no_console {
        config.console_output = false;
    }
    if cli.no_file_log {
        config.file_output = false;
    }
    Ok(config)
}

/// Parses the command line, configures logging and runs the command.
///
/// The MPS fallback flag is expected to be set already (see `bin.rs`).
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_logging_config(&cli, |name| std::env::var(name).ok())
        .context("Invalid logging settings")?;
    start(config).context("Failed to initialize logging")?;

    tracing::debug!("Running command {:?}", cli.command);
    execute(&cli.command)
}

pub fn execute(command: &Command) -> Result<()> {
    match command {
        Command::Formats => {
            for choice in format_choices() {
                println!("{choice}");
            }
        }
        Command::Check { choice } => {
            let parsed: FormatChoice = choice.parse()?;
            println!("{parsed}: input={} output={}", parsed.input(), parsed.output());
        }
        Command::LogDir => {
            let dir = paths::default_log_dir()?;
            println!("{}", dir.display());
        }
        Command::Info => {
            let logger = get_logger(ROOT_LOGGER);
            println!("tardis_em {VERSION}");
            println!("log level: {}", level_to_str(logger.effective_level()));
            println!("console output: {}", logger.has_console_handler());
            for file in logger.log_files() {
                println!("log file: {}", file.display());
            }
        }
    }
    Ok(())
}
