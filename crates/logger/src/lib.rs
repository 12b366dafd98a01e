//! Logging infrastructure for rhs.
//!
//! A process-wide logger with optional file output and a bounded in-memory
//! history that the status bar reads. Logging before `init` is a no-op, so
//! library crates can log unconditionally.

use chrono::Local;
use std::collections::VecDeque;
use std::fs::{self, OpenOptions};
use std::io::Write as IoWrite;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

/// Log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Timestamp in HH:MM:SS.mmm format
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
}

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn to_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Unknown log level: {}", s)),
        }
    }
}

#[derive(Debug)]
struct Logger {
    entries: VecDeque<LogEntry>,
    max_entries: usize,
    min_level: LogLevel,
    /// None keeps the log in memory only
    file_path: Option<PathBuf>,
}

impl Logger {
    fn new(file_path: Option<PathBuf>, max_entries: usize, min_level: LogLevel) -> Self {
        if let Some(path) = &file_path {
            if let Some(parent) = path.parent() {
                let _ = fs::create_dir_all(parent);
            }
            if let Ok(mut file) = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(path)
            {
                let _ = writeln!(file, "=== rhs log start ===");
            }
        }

        Self {
            entries: VecDeque::new(),
            max_entries,
            min_level,
            file_path,
        }
    }

    fn add_entry(&mut self, level: LogLevel, message: String) {
        if level < self.min_level {
            return;
        }

        let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();

        if let Some(path) = &self.file_path {
            if let Ok(mut file) = OpenOptions::new().append(true).create(true).open(path) {
                let _ = writeln!(file, "[{}] {}: {}", timestamp, level.to_str(), message);
            }
        }

        self.entries.push_back(LogEntry {
            timestamp,
            level,
            message,
        });
        while self.entries.len() > self.max_entries {
            self.entries.pop_front();
        }
    }
}

static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

fn with_logger(f: impl FnOnce(&mut Logger)) {
    if let Some(logger) = LOGGER.get() {
        if let Ok(mut logger) = logger.lock() {
            f(&mut logger);
        }
    }
}

/// Initialize the global logger.
///
/// Subsequent calls are ignored.
///
/// # Arguments
///
/// * `file_path` - Log file path, or None for in-memory logging only
/// * `max_entries` - Maximum number of entries kept in memory
/// * `min_level` - Minimum level to record
pub fn init(file_path: Option<PathBuf>, max_entries: usize, min_level: LogLevel) {
    LOGGER.get_or_init(|| Mutex::new(Logger::new(file_path, max_entries, min_level)));
}

/// Update the minimum level filter.
pub fn set_min_level(level: LogLevel) {
    with_logger(|logger| logger.min_level = level);
}

pub fn debug(message: impl Into<String>) {
    with_logger(|logger| logger.add_entry(LogLevel::Debug, message.into()));
}

pub fn info(message: impl Into<String>) {
    with_logger(|logger| logger.add_entry(LogLevel::Info, message.into()));
}

pub fn warn(message: impl Into<String>) {
    with_logger(|logger| logger.add_entry(LogLevel::Warn, message.into()));
}

pub fn error(message: impl Into<String>) {
    with_logger(|logger| logger.add_entry(LogLevel::Error, message.into()));
}

/// Snapshot of the in-memory history, oldest first.
pub fn entries() -> Vec<LogEntry> {
    let mut out = Vec::new();
    with_logger(|logger| out = logger.entries.iter().cloned().collect());
    out
}

/// Most recent entry, if any.
pub fn last_entry() -> Option<LogEntry> {
    let mut out = None;
    with_logger(|logger| out = logger.entries.back().cloned());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_from_str() {
        assert_eq!("debug".parse::<LogLevel>(), Ok(LogLevel::Debug));
        assert_eq!("WARNING".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_logger_filters_and_bounds_history() {
        let mut logger = Logger::new(None, 2, LogLevel::Info);
        logger.add_entry(LogLevel::Debug, "hidden".into());
        logger.add_entry(LogLevel::Info, "one".into());
        logger.add_entry(LogLevel::Warn, "two".into());
        logger.add_entry(LogLevel::Error, "three".into());

        let messages: Vec<_> = logger.entries.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["two", "three"]);
    }

    #[test]
    fn test_calls_before_init_are_noops() {
        info("dropped");
        assert!(entries().is_empty());
        assert!(last_entry().is_none());
    }
}
