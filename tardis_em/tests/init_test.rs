//! Tests for process initialization through the global registry.
//!
//! The global registry and the global tracing subscriber are process-wide, so
//! everything touching them lives in a single test.

use std::fs;
use tardis_em::{
    LoggingConfig, MPS_FALLBACK_ENV, ROOT_LOGGER, get_logger, init_with, set_log_level,
};
use tempfile::tempdir;
use tracing::level_filters::LevelFilter;

#[test]
fn test_init_configures_tardis_logger() {
    let temp_dir = tempdir().unwrap();
    let log_file = temp_dir.path().join("tardis.log");
    let config = LoggingConfig {
        log_file: Some(log_file.clone()),
        console_output: false,
        ..LoggingConfig::default()
    };

    // SAFETY: the only test in this binary; no other thread touches the environment.
    let logger = unsafe { init_with(config.clone()) }.unwrap();
    assert_eq!(logger.name(), ROOT_LOGGER);
    assert_eq!(std::env::var(MPS_FALLBACK_ENV).unwrap(), "1");

    let content = fs::read_to_string(&log_file).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with(" - tardis_em - INFO - TARDIS-em logging initialized"));
    assert!(lines[1].ends_with(" - tardis_em - INFO - TARDIS initialized"));

    // Module loggers inherit and forward to tardis_em.
    let module_logger = get_logger("tardis_em::utils::predictor");
    module_logger.debug("hidden at info");
    set_log_level(LevelFilter::DEBUG);
    assert_eq!(logger.handler_levels(), vec![LevelFilter::DEBUG]);
    module_logger.debug("visible at debug");

    // tracing events use the same route.
    tracing::warn!(target: "tardis_em::cnn", "routed through tracing");

    let content = fs::read_to_string(&log_file).unwrap();
    assert!(!content.contains("hidden at info"));
    assert!(content.contains(" - tardis_em.utils.predictor - DEBUG - visible at debug"));
    assert!(content.contains(" - tardis_em.cnn - WARN - routed through tracing"));

    // Re-initializing replaces the handler and resets the level.
    // SAFETY: as above.
    let logger = unsafe { init_with(config) }.unwrap();
    assert_eq!(logger.handler_count(), 1);
    assert_eq!(logger.level(), Some(LevelFilter::INFO));
}
