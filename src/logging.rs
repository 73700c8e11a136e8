/// Diagnostics for the scraping pipeline.
///
/// The matcher and normalizer report absence through their return values;
/// this module is where the "why" goes. Everything writes to stderr so the
/// structured JSON on stdout stays clean. Debug-level messages (ambiguous
/// label patterns, match counts) only appear once `--verbose` lowers the
/// minimum level.

use std::fmt;
use std::sync::Mutex;

use chrono::Utc;

// ---------------------------------------------------------------------------
// Log levels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warning => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

// ---------------------------------------------------------------------------
// Logger
// ---------------------------------------------------------------------------

/// Global logger instance. Uninitialized means silent.
static LOGGER: Mutex<Option<Logger>> = Mutex::new(None);

pub struct Logger {
    /// Minimum log level to emit.
    min_level: LogLevel,
}

impl Logger {
    /// Initialize the global logger.
    pub fn init(min_level: LogLevel) {
        *LOGGER.lock().unwrap() = Some(Logger { min_level });
    }

    fn log(&self, level: LogLevel, station_id: Option<&str>, message: &str) {
        if level < self.min_level {
            return;
        }

        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
        let station_part = station_id.map(|s| format!(" [{}]", s)).unwrap_or_default();
        eprintln!("{} {}{}: {}", timestamp, level, station_part, message);
    }
}

// ---------------------------------------------------------------------------
// Public logging functions
// ---------------------------------------------------------------------------

/// Initialize the global logger with a minimum level.
pub fn init_logger(min_level: LogLevel) {
    Logger::init(min_level);
}

/// Log a debug message (opt-in diagnostics).
pub fn debug(station_id: Option<&str>, message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        logger.log(LogLevel::Debug, station_id, message);
    }
}

/// Log an informational message.
pub fn info(station_id: Option<&str>, message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        logger.log(LogLevel::Info, station_id, message);
    }
}

/// Log a warning message.
pub fn warn(station_id: Option<&str>, message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        logger.log(LogLevel::Warning, station_id, message);
    }
}

/// Log an error message.
pub fn error(station_id: Option<&str>, message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        logger.log(LogLevel::Error, station_id, message);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
    }

    #[test]
    fn test_logging_without_init_is_a_no_op() {
        // Library consumers may never call init_logger; logging must not
        // panic or require it.
        debug(Some("46053"), "uninitialized debug");
        error(None, "uninitialized error");
    }
}
