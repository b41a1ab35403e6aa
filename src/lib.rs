#![forbid(unsafe_code)]

//! `commonlog` - a named logger facade with per-sink thresholds and formats.
//!
//! - Loggers are looked up by name; handles for the same name share sinks
//! - Console, file and custom sinks, each with its own floor and template
//! - One-call setup of a per-level file set (`debug_x.log` ... `critical_x.log`)
//! - TOML configuration
//!
//! # Example
//!
//! ```no_run
//! use commonlog::{Level, Logger};
//!
//! # fn main() -> Result<(), commonlog::Error> {
//! let logger = Logger::create("app");
//! logger.add_console_sink(Level::Info, Some("{level}: {msg}"));
//! logger.add_file_sink("errors.log", Level::Error, None)?;
//!
//! logger.info("Application started")?;
//! logger.error("Connection failed")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - `cli` (default): enables the `commonlog` demo binary

pub mod config;
mod error;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod logger;
pub mod output;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::Config;
pub use error::Error;
pub use fmt::{DEFAULT_FORMAT, FormatTemplate, FormatValues};
pub use level::{Level, ParseLevelError};
pub use logger::{Logger, Registry, SinkInfo};
pub use output::{
    ConsoleOutput, FileOutput, LogRecord, Output, SinkKind, Stream, validate_timestamp_format,
};
