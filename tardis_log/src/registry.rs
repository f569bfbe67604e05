//! # Logger Registry
//!
//! A process-wide table of named loggers. Names are dotted paths
//! (`tardis_em.utils.io`); Rust module paths (`tardis_em::utils::io`) are
//! normalized to the same form, so `tracing` targets and explicit logger names
//! address the same entries. The empty name is the root logger.
//!
//! ## Dispatch
//!
//! A record first has to pass the *effective level* of the logger it was sent
//! to: the logger's own level, or the nearest ancestor's if it has none. It is
//! then offered to the handlers of that logger and of each ancestor in turn,
//! until a logger with `propagate == false` has been processed. Each handler
//! applies its own threshold.
//!
//! ## Configuration
//!
//! [`LoggerRegistry::setup_logger`] replaces the whole handler set of a logger
//! in one write, so calling it repeatedly never accumulates duplicates and the
//! last call wins. Handlers are opened before the swap; if that fails the
//! previous configuration is left untouched.
//!
//! ## Locking
//!
//! Dispatch holds the read lock for the duration of the handler writes;
//! configuration takes the write lock and therefore waits for in-flight records.

use crate::config::LoggerOptions;
use crate::error::Result;
use crate::format::Record;
use crate::handler::{Handler, HandlerKind};
use crate::paths;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::Level;
use tracing::level_filters::LevelFilter;

/// Level of the root logger in a fresh registry.
pub const ROOT_DEFAULT_LEVEL: LevelFilter = LevelFilter::WARN;

static GLOBAL: LazyLock<Arc<LoggerRegistry>> = LazyLock::new(|| Arc::new(LoggerRegistry::new()));

#[derive(Debug)]
struct LoggerState {
    level: Option<LevelFilter>,
    propagate: bool,
    handlers: Vec<Handler>,
}

impl Default for LoggerState {
    fn default() -> Self {
        Self {
            level: None,
            propagate: true,
            handlers: Vec::new(),
        }
    }
}

#[derive(Debug)]
pub struct LoggerRegistry {
    loggers: RwLock<HashMap<String, LoggerState>>,
}

impl Default for LoggerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerRegistry {
    /// A registry holding only the root logger.
    pub fn new() -> Self {
        let root = LoggerState {
            level: Some(ROOT_DEFAULT_LEVEL),
            ..LoggerState::default()
        };
        Self {
            loggers: RwLock::new(HashMap::from([(String::new(), root)])),
        }
    }

    /// Returns a handle to `name`, creating the entry on first use.
    pub fn get_logger(self: &Arc<Self>, name: &str) -> Logger {
        let name = normalize_name(name);
        self.write().entry(name.clone()).or_default();
        Logger {
            name,
            registry: Arc::clone(self),
        }
    }

    /// Configures a logger from `options` and returns its handle.
    ///
    /// The logger gets `options.level`, stops propagating, and its handlers
    /// are replaced by a console handler and/or a file handler at the same
    /// level. Without an explicit `log_file` the file goes to the timestamped
    /// default location under the home directory.
    pub fn setup_logger(self: &Arc<Self>, options: &LoggerOptions) -> Result<Logger> {
        let name = normalize_name(options.name.as_deref().unwrap_or_default());

        let mut handlers = Vec::new();
        if options.console_output {
            handlers.push(Handler::console(options.level));
        }
        if options.file_output {
            let path = match &options.log_file {
                Some(path) => path.clone(),
                None => paths::default_log_file()?,
            };
            handlers.push(Handler::file(&path, options.level)?);
        }

        {
            let mut loggers = self.write();
            let state = loggers.entry(name.clone()).or_default();
            state.level = Some(options.level);
            state.propagate = false;
            state.handlers = handlers;
        }

        Ok(Logger {
            name,
            registry: Arc::clone(self),
        })
    }

    /// Sets the level of `name` and of every handler attached to it.
    pub fn set_level_recursive(&self, name: &str, level: LevelFilter) {
        let mut loggers = self.write();
        let state = loggers.entry(normalize_name(name)).or_default();
        state.level = Some(level);
        for handler in &mut state.handlers {
            handler.set_level(level);
        }
    }

    /// Whether a record at `level` sent to `name` would pass the logger's
    /// effective level. Handler thresholds are not considered.
    pub fn is_enabled(&self, name: &str, level: Level) -> bool {
        let name = normalize_name(name);
        level <= effective_level(&self.read(), &name)
    }

    /// Dispatches a record through the hierarchy starting at `name`.
    ///
    /// Handlers write while the registry read lock is held, so a slow sink
    /// delays `setup_logger` and `set_level_recursive` callers on other threads
    /// until the write finishes. Concurrent `emit` calls do not block each other.
    pub fn emit(&self, name: &str, level: Level, message: &str) {
        let name = normalize_name(name);
        let loggers = self.read();
        if level > effective_level(&loggers, &name) {
            return;
        }

        let record = Record::new(&name, level, message);
        let mut current = Some(name.as_str());
        while let Some(logger) = current {
            if let Some(state) = loggers.get(logger) {
                for handler in &state.handlers {
                    // Reporting through tracing here would re-enter the registry.
                    if let Err(err) = handler.emit(&record) {
                        eprintln!("tardis_log: failed to write record for '{logger}': {err}");
                    }
                }
                if !state.propagate {
                    break;
                }
            }
            current = parent(logger);
        }
    }

    /// Whether an entry exists for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.read().contains_key(&normalize_name(name))
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, LoggerState>> {
        self.loggers.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, LoggerState>> {
        self.loggers.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn with_state<T>(&self, name: &str, f: impl FnOnce(&LoggerState) -> T) -> T {
        let loggers = self.read();
        match loggers.get(name) {
            Some(state) => f(state),
            None => f(&LoggerState::default()),
        }
    }

    fn with_state_mut<T>(&self, name: &str, f: impl FnOnce(&mut LoggerState) -> T) -> T {
        let mut loggers = self.write();
        f(loggers.entry(name.to_string()).or_default())
    }
}

/// A cheap, cloneable handle to one registry entry.
#[derive(Debug, Clone)]
pub struct Logger {
    name: String,
    registry: Arc<LoggerRegistry>,
}

impl Logger {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The logger's own level; `None` means it inherits from its ancestors.
    pub fn level(&self) -> Option<LevelFilter> {
        self.registry.with_state(&self.name, |state| state.level)
    }

    pub fn effective_level(&self) -> LevelFilter {
        effective_level(&self.registry.read(), &self.name)
    }

    pub fn is_enabled_for(&self, level: Level) -> bool {
        level <= self.effective_level()
    }

    pub fn set_level(&self, level: LevelFilter) {
        self.registry
            .with_state_mut(&self.name, |state| state.level = Some(level));
    }

    pub fn propagate(&self) -> bool {
        self.registry.with_state(&self.name, |state| state.propagate)
    }

    pub fn set_propagate(&self, propagate: bool) {
        self.registry
            .with_state_mut(&self.name, |state| state.propagate = propagate);
    }

    pub fn add_handler(&self, handler: Handler) {
        self.registry
            .with_state_mut(&self.name, |state| state.handlers.push(handler));
    }

    pub fn clear_handlers(&self) {
        self.registry
            .with_state_mut(&self.name, |state| state.handlers.clear());
    }

    pub fn handler_count(&self) -> usize {
        self.registry
            .with_state(&self.name, |state| state.handlers.len())
    }

    pub fn handler_levels(&self) -> Vec<LevelFilter> {
        self.registry.with_state(&self.name, |state| {
            state.handlers.iter().map(Handler::level).collect()
        })
    }

    pub fn has_console_handler(&self) -> bool {
        self.registry.with_state(&self.name, |state| {
            state
                .handlers
                .iter()
                .any(|handler| handler.kind() == HandlerKind::Console)
        })
    }

    /// Paths of the file handlers attached directly to this logger.
    pub fn log_files(&self) -> Vec<PathBuf> {
        self.registry.with_state(&self.name, |state| {
            state
                .handlers
                .iter()
                .filter_map(|handler| match handler.kind() {
                    HandlerKind::File(path) => Some(path.to_path_buf()),
                    _ => None,
                })
                .collect()
        })
    }

    pub fn log(&self, level: Level, message: impl AsRef<str>) {
        self.registry.emit(&self.name, level, message.as_ref());
    }

    pub fn trace(&self, message: impl AsRef<str>) {
        self.log(Level::TRACE, message);
    }

    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(Level::DEBUG, message);
    }

    pub fn info(&self, message: impl AsRef<str>) {
        self.log(Level::INFO, message);
    }

    pub fn warn(&self, message: impl AsRef<str>) {
        self.log(Level::WARN, message);
    }

    pub fn error(&self, message: impl AsRef<str>) {
        self.log(Level::ERROR, message);
    }
}

/// The process-wide registry.
pub fn global() -> &'static Arc<LoggerRegistry> {
    &GLOBAL
}

/// [`LoggerRegistry::get_logger`] on the global registry.
pub fn get_logger(name: &str) -> Logger {
    global().get_logger(name)
}

/// [`LoggerRegistry::setup_logger`] on the global registry.
pub fn setup_logger(options: &LoggerOptions) -> Result<Logger> {
    global().setup_logger(options)
}

/// Maps Rust module paths onto dotted logger names.
pub fn normalize_name(name: &str) -> String {
    name.replace("::", ".")
}

fn parent(name: &str) -> Option<&str> {
    if name.is_empty() {
        return None;
    }
    Some(name.rfind('.').map_or("", |idx| &name[..idx]))
}

fn effective_level(loggers: &HashMap<String, LoggerState>, name: &str) -> LevelFilter {
    let mut current = Some(name);
    while let Some(logger) = current {
        if let Some(level) = loggers.get(logger).and_then(|state| state.level) {
            return level;
        }
        current = parent(logger);
    }
    ROOT_DEFAULT_LEVEL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_chain() {
        assert_eq!(parent("a.b.c"), Some("a.b"));
        assert_eq!(parent("a"), Some(""));
        assert_eq!(parent(""), None);
    }

    #[test]
    fn test_normalize_module_path() {
        assert_eq!(normalize_name("tardis_em::utils::io"), "tardis_em.utils.io");
        assert_eq!(normalize_name("tardis_em.utils"), "tardis_em.utils");
    }

    #[test]
    fn test_effective_level_inherits_from_ancestor() {
        let registry = Arc::new(LoggerRegistry::new());
        let parent = registry.get_logger("tardis_em");
        let child = registry.get_logger("tardis_em.utils.io");

        assert_eq!(child.level(), None);
        assert_eq!(child.effective_level(), ROOT_DEFAULT_LEVEL);

        parent.set_level(LevelFilter::DEBUG);
        assert_eq!(child.effective_level(), LevelFilter::DEBUG);
        assert!(child.is_enabled_for(Level::DEBUG));
        assert!(!child.is_enabled_for(Level::TRACE));
    }

    #[test]
    fn test_get_logger_is_shared() {
        let registry = Arc::new(LoggerRegistry::new());
        let first = registry.get_logger("tardis_em::cnn");
        let second = registry.get_logger("tardis_em.cnn");
        first.set_level(LevelFilter::ERROR);
        assert_eq!(second.level(), Some(LevelFilter::ERROR));
        assert!(registry.contains("tardis_em.cnn"));
    }
}
