//! Console and file cover the common cases; the `Output` trait lets callers attach any other
//! destination without changing the logger.

mod console;
mod file;

pub use console::{ConsoleOutput, Stream};
pub use file::FileOutput;

use crate::fmt::FormatValues;
use crate::level::Level;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use std::fmt::Write;
use std::path::PathBuf;

/// Timestamp layout matching the conventional `asctime` rendering (`2024-05-01 09:30:00,123`).
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Rejects layouts chrono would fail to render, such as `%Q` or a trailing `%`.
///
/// # Errors
/// `Error::InvalidTimestampFormat` carrying the rejected layout.
pub fn validate_timestamp_format(format: &str) -> Result<(), crate::Error> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(crate::Error::InvalidTimestampFormat(format.to_string()));
    }
    Ok(())
}

/// Everything a sink needs to render one line, captured once per emit call.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub timestamp: DateTime<Local>,
    pub name: String,
    pub level: Level,
    pub message: String,
}

impl LogRecord {
    #[must_use]
    pub fn new(name: impl Into<String>, level: Level, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            name: name.into(),
            level,
            message: message.into(),
        }
    }

    /// Placeholder values shared by every sink the record reaches. An unrenderable
    /// layout leaves `{timestamp}` empty rather than failing the record.
    #[must_use]
    pub fn values(&self, timestamp_format: &str) -> FormatValues {
        let mut timestamp = String::new();
        if write!(timestamp, "{}", self.timestamp.format(timestamp_format)).is_err() {
            timestamp.clear();
        }
        FormatValues::new()
            .timestamp(timestamp)
            .name(&self.name)
            .level(self.level.label())
            .levelno(self.level.value().to_string())
            .msg(&self.message)
    }
}

/// What a sink writes to, as reported by `Logger::sinks`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkKind {
    Console(Stream),
    File(PathBuf),
    Custom,
}

/// `Send + Sync` so one logger can be shared across threads behind an `Arc`.
pub trait Output: Send + Sync {
    /// Writes one already-formatted line. The record is passed along for backends
    /// that route on level or name.
    ///
    /// # Errors
    /// I/O errors from the underlying stream or file.
    fn write(&self, record: &LogRecord, line: &str) -> Result<(), crate::Error>;

    /// # Errors
    /// I/O errors from the underlying stream or file.
    fn flush(&self) -> Result<(), crate::Error>;

    fn kind(&self) -> SinkKind {
        SinkKind::Custom
    }
}
