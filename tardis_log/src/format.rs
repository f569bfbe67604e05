//! Line formatting shared by every handler.

use chrono::{DateTime, Local};
use tracing::Level;

/// `strftime` pattern for the timestamp column.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single log event on its way to the handlers.
#[derive(Debug, Clone)]
pub struct Record<'a> {
    pub timestamp: DateTime<Local>,
    pub logger: &'a str,
    pub level: Level,
    pub message: &'a str,
}

impl<'a> Record<'a> {
    pub fn new(logger: &'a str, level: Level, message: &'a str) -> Self {
        Self {
            timestamp: Local::now(),
            logger,
            level,
            message,
        }
    }
}

/// Renders `<timestamp> - <logger> - <LEVEL> - <message>` with a trailing newline.
///
/// The root logger has an empty name and is rendered as `root`.
pub fn format_record(record: &Record<'_>) -> String {
    let name = if record.logger.is_empty() {
        "root"
    } else {
        record.logger
    };
    format!(
        "{} - {} - {} - {}\n",
        record.timestamp.format(DATE_FORMAT),
        name,
        record.level,
        record.message
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 3, 7, 9, 5, 1).unwrap()
    }

    #[test]
    fn test_format_record_layout() {
        let record = Record {
            timestamp: fixed_time(),
            logger: "tardis_em",
            level: Level::INFO,
            message: "TARDIS initialized",
        };
        assert_eq!(
            format_record(&record),
            "2025-03-07 09:05:01 - tardis_em - INFO - TARDIS initialized\n"
        );
    }

    #[test]
    fn test_format_record_root_name() {
        let record = Record {
            timestamp: fixed_time(),
            logger: "",
            level: Level::WARN,
            message: "careful",
        };
        assert!(format_record(&record).contains(" - root - WARN - careful"));
    }
}
