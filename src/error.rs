//! Unified error type for all commonlog operations.

use std::path::PathBuf;

/// Error type for commonlog operations.
#[derive(Debug)]
pub enum Error {
    /// Write or flush failure at a sink.
    Io(std::io::Error),
    /// A file sink could not be opened for appending.
    SinkOpen {
        path: PathBuf,
        source: std::io::Error,
    },
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Config names a level outside the five known severities.
    InvalidLevel(String),
    /// strftime layout chrono cannot render.
    InvalidTimestampFormat(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::SinkOpen { path, source } => {
                write!(f, "cannot open log file {}: {source}", path.display())
            }
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::InvalidLevel(level) => write!(f, "invalid level in config: {level}"),
            Self::InvalidTimestampFormat(fmt) => write!(f, "invalid timestamp format: {fmt}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::SinkOpen { source: e, .. } => Some(e),
            Self::ConfigParse(e) => Some(e),
            Self::ConfigDirNotFound
            | Self::InvalidLevel(_)
            | Self::InvalidTimestampFormat(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
