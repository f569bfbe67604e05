//! Tests for the default log file location end to end.
//!
//! Points `HOME` at a temporary directory, so it runs as its own test binary
//! with a single test.

use std::fs;
use std::sync::Arc;
use tardis_log::paths::LOG_SUBDIR;
use tardis_log::{LoggerOptions, LoggerRegistry};
use tempfile::tempdir;

#[test]
fn test_setup_without_path_writes_under_home() {
    let home = tempdir().unwrap();
    // SAFETY: the only test in this binary; no other thread touches the environment.
    unsafe { std::env::set_var("HOME", home.path()) };

    let registry = Arc::new(LoggerRegistry::new());
    let logger = registry
        .setup_logger(&LoggerOptions::named("tardis_em").with_console_output(false))
        .unwrap();
    logger.info("default location");

    let files = logger.log_files();
    assert_eq!(files.len(), 1);
    let log_file = &files[0];
    assert_eq!(log_file.parent().unwrap(), home.path().join(LOG_SUBDIR));

    let file_name = log_file.file_name().unwrap().to_str().unwrap();
    let stamp = file_name
        .strip_prefix("tardis_")
        .and_then(|rest| rest.strip_suffix(".log"))
        .unwrap();
    assert!(chrono::NaiveDateTime::parse_from_str(stamp, "%Y%m%d_%H%M%S").is_ok());

    let content = fs::read_to_string(log_file).unwrap();
    assert!(content.ends_with(" - tardis_em - INFO - default location\n"));
}
