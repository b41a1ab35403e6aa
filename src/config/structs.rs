//! Configuration struct definitions.

use crate::fmt::DEFAULT_FORMAT;
use crate::output::{DEFAULT_TIMESTAMP_FORMAT, Stream};
use serde::Deserialize;

/// Logger identity and defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Registry name.
    pub name: String,
    /// Logger threshold.
    pub level: String,
    /// Default format for sinks that don't set their own.
    pub format: String,
    /// strftime layout for `{timestamp}`.
    pub timestamp_format: String,
    /// Base name for the per-level file set; unset means no leveled sinks.
    pub leveled_base: Option<String>,
    /// Directory for the per-level files; unset means the working directory.
    pub leveled_dir: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: "commonlog".to_string(),
            level: "debug".to_string(),
            format: DEFAULT_FORMAT.to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            leveled_base: None,
            leveled_dir: None,
        }
    }
}

/// One `[[sinks]]` entry, tagged by `kind`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SinkConfig {
    Console {
        /// Sink threshold (default info).
        level: Option<String>,
        /// Sink format (default: the logger's).
        format: Option<String>,
        #[serde(default)]
        stream: StreamConfig,
    },
    File {
        /// Target file, `~` expanded.
        path: String,
        level: Option<String>,
        format: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StreamConfig {
    #[default]
    Stderr,
    Stdout,
}

impl From<StreamConfig> for Stream {
    fn from(stream: StreamConfig) -> Self {
        match stream {
            StreamConfig::Stderr => Self::Stderr,
            StreamConfig::Stdout => Self::Stdout,
        }
    }
}

/// The crate's own diagnostics (sink attachment, config loading).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InternalConfig {
    /// Off by default so library users see only their own records.
    pub enabled: bool,
    /// Minimum level for diagnostics.
    pub level: String,
}

impl Default for InternalConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "warning".to_string(),
        }
    }
}
