//! Default log file placement.
//!
//! Without an explicit path, each configuration gets its own file under
//! `~/.tardis_em/logs`, named after the moment it was configured:
//! `tardis_20250307_090501.log`.

use crate::error::{LoggingError, Result};
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// Log directory relative to the home directory.
pub const LOG_SUBDIR: &str = ".tardis_em/logs";

const FILE_PREFIX: &str = "tardis_";
const FILE_EXTENSION: &str = "log";
const STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Returns `<home>/.tardis_em/logs` without touching the filesystem.
pub fn default_log_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(LoggingError::HomeDirUnavailable)?;
    Ok(log_dir_in(&home))
}

/// The log directory for an arbitrary home directory.
pub fn log_dir_in(home: &Path) -> PathBuf {
    home.join(LOG_SUBDIR)
}

/// `dir/tardis_<YYYYmmdd_HHMMSS>.log`
pub fn timestamped_log_file(dir: &Path, now: DateTime<Local>) -> PathBuf {
    dir.join(format!(
        "{FILE_PREFIX}{}.{FILE_EXTENSION}",
        now.format(STAMP_FORMAT)
    ))
}

/// Creates the log directory under `home` (parents included, existing is fine)
/// and returns the timestamped file path inside it. The file itself is not created.
pub fn prepare_default_log_file(home: &Path, now: DateTime<Local>) -> Result<PathBuf> {
    let dir = log_dir_in(home);
    std::fs::create_dir_all(&dir).map_err(|source| LoggingError::CreateLogDir {
        path: dir.clone(),
        source,
    })?;
    Ok(timestamped_log_file(&dir, now))
}

/// [`prepare_default_log_file`] for the current user and the current time.
pub(crate) fn default_log_file() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(LoggingError::HomeDirUnavailable)?;
    prepare_default_log_file(&home, Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamped_log_file_name() {
        let now = Local.with_ymd_and_hms(2024, 12, 31, 23, 59, 58).unwrap();
        let path = timestamped_log_file(Path::new("/var/tmp"), now);
        assert_eq!(path, PathBuf::from("/var/tmp/tardis_20241231_235958.log"));
    }

    #[test]
    fn test_log_dir_in_home() {
        let dir = log_dir_in(Path::new("/home/alice"));
        assert!(dir.ends_with(".tardis_em/logs"));
        assert!(dir.starts_with("/home/alice"));
    }
}
