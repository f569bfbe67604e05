//! Tests for the default log file location.

use chrono::{Local, TimeZone};
use std::fs;
use tardis_log::paths::{LOG_SUBDIR, log_dir_in, prepare_default_log_file, timestamped_log_file};
use tempfile::tempdir;

#[test]
fn test_default_log_file_created_under_home_subdir() {
    let home = tempdir().unwrap();
    let now = Local.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();

    let path = prepare_default_log_file(home.path(), now).unwrap();

    let log_dir = home.path().join(LOG_SUBDIR);
    assert!(log_dir.is_dir());
    assert_eq!(path, log_dir.join("tardis_20250102_030405.log"));
    // Only the directory is prepared; the handler creates the file.
    assert!(!path.exists());
}

#[test]
fn test_prepare_is_idempotent_for_existing_directory() {
    let home = tempdir().unwrap();
    fs::create_dir_all(log_dir_in(home.path())).unwrap();
    let now = Local::now();

    let first = prepare_default_log_file(home.path(), now).unwrap();
    let second = prepare_default_log_file(home.path(), now).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_prepare_fails_when_home_is_a_file() {
    let temp_dir = tempdir().unwrap();
    let fake_home = temp_dir.path().join("home");
    fs::write(&fake_home, "").unwrap();

    let result = prepare_default_log_file(&fake_home, Local::now());
    assert!(matches!(
        result,
        Err(tardis_log::LoggingError::CreateLogDir { .. })
    ));
}

#[test]
fn test_file_names_sort_chronologically() {
    let dir = tempdir().unwrap();
    let earlier = timestamped_log_file(
        dir.path(),
        Local.with_ymd_and_hms(2025, 9, 30, 23, 0, 0).unwrap(),
    );
    let later = timestamped_log_file(
        dir.path(),
        Local.with_ymd_and_hms(2025, 10, 1, 1, 0, 0).unwrap(),
    );
    assert!(earlier < later);
}
