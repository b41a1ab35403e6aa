//! Builds a logger and its sinks from a loaded `Config`.

use super::{Logger, Registry};
use crate::config::{self, Config, SinkConfig, expand_path};
use crate::internal;
use crate::level::Level;
use crate::output::{ConsoleOutput, validate_timestamp_format};

impl Logger {
    /// Looks up `[logger] name` in `registry` and applies the config to it.
    ///
    /// The threshold is applied before any sink is attached, since setting it later
    /// would overwrite each sink's own level.
    ///
    /// # Errors
    /// `Error::InvalidLevel` for an unknown level string, `Error::InvalidTimestampFormat`
    /// for a layout chrono cannot render, `Error::SinkOpen` for a file
    /// that cannot be opened. Sinks attached before the failure stay attached.
    pub fn from_config(registry: &Registry, config: &Config) -> Result<Self, crate::Error> {
        // Logger-wide settings are checked up front so a bad value leaves the logger untouched.
        let level = config.parse_level()?;
        validate_timestamp_format(&config.logger.timestamp_format)?;

        let logger = registry.logger(&config.logger.name);
        internal::debug(
            "LOGGER",
            &format!("Configuring logger '{}'", config.logger.name),
        );

        logger.set_threshold(level);
        logger.set_default_format(&config.logger.format);
        logger.set_timestamp_format(&config.logger.timestamp_format)?;

        for sink in &config.sinks {
            match sink {
                SinkConfig::Console {
                    level,
                    format,
                    stream,
                } => {
                    let level = sink_level(level.as_deref())?;
                    let output = ConsoleOutput::new().stream((*stream).into());
                    logger.add_sink(output, level, format.as_deref());
                }
                SinkConfig::File {
                    path,
                    level,
                    format,
                } => {
                    let level = sink_level(level.as_deref())?;
                    logger.add_file_sink(expand_path(path), level, format.as_deref())?;
                }
            }
        }

        if let Some(base) = &config.logger.leveled_base {
            match &config.logger.leveled_dir {
                Some(dir) => logger.add_leveled_sinks_in(expand_path(dir), base)?,
                None => logger.add_leveled_sinks(base)?,
            }
        }

        match logger.sink_count() {
            0 => internal::warn("LOGGER", "No sinks configured"),
            n => internal::debug("LOGGER", &format!("Logger ready with {n} sinks")),
        }
        Ok(logger)
    }
}

fn sink_level(level: Option<&str>) -> Result<Level, crate::Error> {
    level.map_or(Ok(Level::Info), config::parse_level)
}
