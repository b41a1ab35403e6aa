//! commonlog's own diagnostic logger, used to report config loading and sink attachment.
//!
//! Uses `OnceLock` so the logger is initialized exactly once, even if several entry
//! points race to call `init`. Calls made before `init` are dropped.

use crate::config::{Config, parse_level};
use crate::level::Level;
use crate::logger::Logger;
use std::sync::OnceLock;

static INTERNAL_LOGGER: OnceLock<Logger> = OnceLock::new();

const INTERNAL_FORMAT: &str = "{timestamp} commonlog {level}: {msg}";

/// Enables diagnostics on stderr at `level`. Later calls are no-ops.
pub fn init(level: Level) {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER.get_or_init(|| build_internal_logger(level));
    if !was_init {
        debug("INTERNAL", &format!("Internal logger ready at {level}"));
    }
}

/// Enables diagnostics when `[internal] enabled = true`.
///
/// # Errors
/// `Error::InvalidLevel` when `[internal] level` is not a known severity; diagnostics
/// stay off in that case.
pub fn init_with_config(config: &Config) -> Result<(), crate::Error> {
    if !config.internal.enabled {
        return Ok(());
    }
    init(parse_level(&config.internal.level)?);
    Ok(())
}

/// Not registered anywhere, so user loggers never collide with it.
fn build_internal_logger(level: Level) -> Logger {
    let logger = Logger::new("commonlog");
    logger.set_threshold(level);
    logger.add_console_sink(level, Some(INTERNAL_FORMAT));
    logger
}

fn log(level: Level, scope: &str, msg: &str) {
    if let Some(logger) = INTERNAL_LOGGER.get() {
        // A broken stderr leaves nowhere to report to.
        let _ = logger.log(level, &format!("{scope:<8} {msg}"));
    }
}

pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

pub fn warn(scope: &str, msg: &str) {
    log(Level::Warning, scope, msg);
}

pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}
