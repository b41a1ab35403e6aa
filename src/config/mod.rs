//! TOML configuration describing one logger and its sinks.
//!
//! Loading lives here; the serde schema lives in `structs`.

mod structs;

pub use structs::{InternalConfig, LoggerConfig, SinkConfig, StreamConfig};

use crate::internal;
use crate::level::Level;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// `#[serde(default)]` on every section so an empty file yields a usable logger.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub logger: LoggerConfig,
    pub sinks: Vec<SinkConfig>,
    pub internal: InternalConfig,
}

impl Config {
    /// Reads the config from the default location.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, the file can't be read,
    /// or TOML parsing hits a syntax error.
    pub fn load() -> Result<Self, crate::Error> {
        internal::debug("CONFIG", "Loading config from default location");
        let path = Self::get_config_path()?;
        let config = Self::load_from(&path)?;
        internal::info("CONFIG", &format!("Config loaded from {}", path.display()));
        Ok(config)
    }

    /// Loads from an explicit path. A missing file yields the defaults.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// # Errors
    /// `Error::ConfigParse` on malformed TOML or an unknown sink kind.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// `<config_dir>/commonlog/commonlog.toml` (XDG on Linux).
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("commonlog").join("commonlog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// # Errors
    /// `Error::InvalidLevel` when `[logger] level` is not a known severity.
    pub fn parse_level(&self) -> Result<Level, crate::Error> {
        parse_level(&self.logger.level)
    }
}

/// Config is strict about levels, unlike `Logger::set_threshold`: a typo should not
/// silently change what gets logged.
pub(crate) fn parse_level(s: &str) -> Result<Level, crate::Error> {
    s.parse()
        .map_err(|_| crate::Error::InvalidLevel(s.to_string()))
}

/// Expands a leading `~` so config paths can point into the home directory.
#[must_use]
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.logger.name, "commonlog");
        assert_eq!(config.parse_level().unwrap(), Level::Debug);
        assert!(config.sinks.is_empty());
        assert!(!config.internal.enabled);
    }

    #[test]
    fn sinks_are_tagged_by_kind() {
        let config = Config::parse(
            r#"
[[sinks]]
kind = "console"
stream = "stdout"

[[sinks]]
kind = "file"
path = "app.log"
level = "error"
"#,
        )
        .unwrap();

        assert_eq!(
            config.sinks,
            vec![
                SinkConfig::Console {
                    level: None,
                    format: None,
                    stream: StreamConfig::Stdout,
                },
                SinkConfig::File {
                    path: "app.log".to_string(),
                    level: Some("error".to_string()),
                    format: None,
                },
            ]
        );
    }

    #[test]
    fn file_sink_requires_path() {
        assert!(Config::parse("[[sinks]]\nkind = \"file\"\n").is_err());
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!(Config::parse("[[sinks]]\nkind = \"syslog\"\n").is_err());
    }

    #[test]
    fn bad_level_is_reported() {
        let config = Config::parse("[logger]\nlevel = \"loud\"\n").unwrap();
        assert!(matches!(
            config.parse_level(),
            Err(crate::Error::InvalidLevel(ref s)) if s == "loud"
        ));
    }

    #[test]
    fn plain_paths_pass_through() {
        assert_eq!(expand_path("logs/x.log"), PathBuf::from("logs/x.log"));
    }
}
