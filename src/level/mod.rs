//! Severity levels that gate which records reach which sinks.

use std::fmt;
use std::str::FromStr;

/// Derives `Ord` so both the logger and each sink can compare a record against their floor.
///
/// Discriminants are the conventional numeric codes (10 through 50).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Level {
    /// Development-time detail; the default logger threshold so nothing is lost until narrowed.
    #[default]
    Debug = 10,
    /// Normal operational milestones. Default floor for newly attached sinks.
    Info = 20,
    /// Non-fatal anomalies that may need attention.
    Warning = 30,
    /// Failures that prevent an operation from completing.
    Error = 40,
    /// Failures that leave the process unable to continue.
    Critical = 50,
}

impl Level {
    /// Lowercase because file names and config files use lowercase level strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Critical => "critical",
        }
    }

    /// Uppercase name rendered by the `{level}` placeholder.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Only the five exact codes map to a level; anything in between is not a severity.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            10 => Some(Self::Debug),
            20 => Some(Self::Info),
            30 => Some(Self::Warning),
            40 => Some(Self::Error),
            50 => Some(Self::Critical),
            _ => None,
        }
    }

    /// Ascending order. Bulk sink attachment relies on it.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Debug,
            Self::Info,
            Self::Warning,
            Self::Error,
            Self::Critical,
        ]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` and the `TryFrom` conversions so callers can tell "not a severity" apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warning" | "warn" => Ok(Self::Warning),
            "error" | "err" => Ok(Self::Error),
            "critical" | "fatal" => Ok(Self::Critical),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

impl TryFrom<&str> for Level {
    type Error = ParseLevelError;

    fn try_from(s: &str) -> Result<Self, ParseLevelError> {
        s.parse()
    }
}

impl TryFrom<u8> for Level {
    type Error = ParseLevelError;

    fn try_from(value: u8) -> Result<Self, ParseLevelError> {
        Self::from_value(value).ok_or_else(|| ParseLevelError(value.to_string()))
    }
}

impl TryFrom<i32> for Level {
    type Error = ParseLevelError;

    fn try_from(value: i32) -> Result<Self, ParseLevelError> {
        u8::try_from(value)
            .ok()
            .and_then(Self::from_value)
            .ok_or_else(|| ParseLevelError(value.to_string()))
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.value()
    }
}
