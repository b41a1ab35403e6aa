//! Command-line entry point that exercises a logger at every severity.

use crate::config::Config;
use crate::level::Level;
use crate::logger::{Logger, Registry};
use clap::Parser;
use std::path::PathBuf;

/// Log level for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => Self::Debug,
            LogLevel::Info => Self::Info,
            LogLevel::Warning => Self::Warning,
            LogLevel::Error => Self::Error,
            LogLevel::Critical => Self::Critical,
        }
    }
}

/// commonlog - write one message per severity through a leveled logger.
#[derive(Parser, Debug)]
#[command(name = "commonlog", version, about = "Write one message per severity through a leveled logger")]
pub struct Cli {
    /// Logger name
    #[arg(long, default_value = "test_logger")]
    pub name: String,

    /// Base name for the per-level files (`debug_<base>.log`, ...)
    #[arg(long, default_value = "simple")]
    pub base_name: String,

    /// Logger threshold, applied before any sink is attached (overrides `[logger] level`)
    #[arg(long, value_enum)]
    pub level: Option<LogLevel>,

    /// TOML config describing the logger and its sinks; replaces the leveled setup
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Builds the logger the arguments describe.
///
/// # Errors
/// Config load failures and sink open failures.
pub fn build_logger(cli: &Cli, config: Option<&Config>) -> Result<Logger, crate::Error> {
    if let Some(config) = config {
        // Overriding the config keeps the level ahead of sink attachment, so configured
        // sink floors survive.
        let mut config = config.clone();
        if let Some(level) = cli.level {
            config.logger.level = Level::from(level).as_str().to_string();
        }
        return Logger::from_config(Registry::global(), &config);
    }

    let logger = Logger::create(&cli.name);
    if let Some(level) = cli.level {
        logger.set_threshold(Level::from(level));
    }
    logger.add_leveled_sinks(&cli.base_name)?;
    Ok(logger)
}

/// Emits the demo sequence: one message per severity, then a closing info line.
///
/// # Errors
/// The first sink write failure.
pub fn run_demo(logger: &Logger) -> Result<(), crate::Error> {
    logger.debug("Debugging now...")?;
    logger.info("Informing now...")?;
    logger.warning("Warning now...")?;
    logger.error("Error now...")?;
    logger.critical("Critical now...")?;
    logger.info("Bye cruel world.")?;
    logger.flush()
}
