//! Output destinations attached to a logger.
//!
//! A [`Handler`] pairs a sink with its own level threshold. Records below the
//! threshold are dropped by the handler even when the logger admitted them.

use crate::error::{LoggingError, Result};
use crate::format::{Record, format_record};
use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::level_filters::LevelFilter;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::MakeWriter;

pub struct Handler {
    level: LevelFilter,
    sink: Sink,
}

enum Sink {
    Console,
    File {
        path: PathBuf,
        appender: RollingFileAppender,
    },
    Stream(Mutex<Box<dyn Write + Send>>),
}

/// What a handler writes to, for inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerKind<'a> {
    Console,
    File(&'a Path),
    Stream,
}

impl Handler {
    /// Writes to standard output.
    pub fn console(level: LevelFilter) -> Self {
        Self {
            level,
            sink: Sink::Console,
        }
    }

    /// Appends to `path`, creating the file and its parent directories if needed.
    pub fn file(path: impl AsRef<Path>, level: LevelFilter) -> Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| LoggingError::InvalidLogFile {
                path: path.to_path_buf(),
            })?;
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        // A prefix with no suffix under Rotation::NEVER keeps the file name verbatim.
        let appender = RollingFileAppender::builder()
            .rotation(Rotation::NEVER)
            .filename_prefix(file_name)
            .build(&dir)
            .map_err(|source| LoggingError::OpenLogFile {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            level,
            sink: Sink::File {
                path: path.to_path_buf(),
                appender,
            },
        })
    }

    /// Writes to an arbitrary stream, e.g. stderr or an in-memory buffer.
    pub fn stream<W>(writer: W, level: LevelFilter) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            level,
            sink: Sink::Stream(Mutex::new(Box::new(writer))),
        }
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    pub fn set_level(&mut self, level: LevelFilter) {
        self.level = level;
    }

    pub fn kind(&self) -> HandlerKind<'_> {
        match &self.sink {
            Sink::Console => HandlerKind::Console,
            Sink::File { path, .. } => HandlerKind::File(path),
            Sink::Stream(_) => HandlerKind::Stream,
        }
    }

    /// Whether a record at `level` passes this handler's threshold.
    pub fn accepts(&self, level: tracing::Level) -> bool {
        level <= self.level
    }

    /// Formats and writes the record as a single buffer. Records below the
    /// handler's level are skipped and count as success.
    pub fn emit(&self, record: &Record<'_>) -> io::Result<()> {
        if !self.accepts(record.level) {
            return Ok(());
        }
        let line = format_record(record);
        match &self.sink {
            Sink::Console => {
                let mut out = io::stdout().lock();
                out.write_all(line.as_bytes())?;
                out.flush()
            }
            Sink::File { appender, .. } => {
                let mut writer = appender.make_writer();
                writer.write_all(line.as_bytes())?;
                writer.flush()
            }
            Sink::Stream(stream) => {
                let mut stream = stream
                    .lock()
                    .map_err(|_| io::Error::other("log stream mutex poisoned"))?;
                stream.write_all(line.as_bytes())?;
                stream.flush()
            }
        }
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("level", &self.level)
            .field("kind", &self.kind())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use tracing::Level;

    #[test]
    fn test_handler_threshold() {
        let handler = Handler::console(LevelFilter::WARN);
        assert!(handler.accepts(Level::ERROR));
        assert!(handler.accepts(Level::WARN));
        assert!(!handler.accepts(Level::INFO));
        assert!(!Handler::console(LevelFilter::OFF).accepts(Level::ERROR));
    }

    #[test]
    fn test_file_handler_appends_lines() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("run.log");
        let handler = Handler::file(&path, LevelFilter::INFO).unwrap();
        assert_eq!(handler.kind(), HandlerKind::File(&path));

        handler
            .emit(&Record::new("tardis_em", Level::INFO, "first"))
            .unwrap();
        handler
            .emit(&Record::new("tardis_em", Level::DEBUG, "hidden"))
            .unwrap();
        handler
            .emit(&Record::new("tardis_em", Level::ERROR, "second"))
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(" - tardis_em - INFO - first"));
        assert!(lines[1].ends_with(" - tardis_em - ERROR - second"));
    }

    #[test]
    fn test_file_handler_rejects_path_without_name() {
        let result = Handler::file("/", LevelFilter::INFO);
        assert!(matches!(result, Err(LoggingError::InvalidLogFile { .. })));
    }
}
