use commonlog::{Config, Error, Level, Logger, Registry, SinkKind, Stream};
use std::fs;
use tempfile::TempDir;

#[test]
fn load_from_missing_file_gives_defaults() {
    let tmp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&tmp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.logger.name, "commonlog");
    assert!(config.sinks.is_empty());
}

#[test]
fn load_from_reports_parse_errors() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("bad.toml");
    fs::write(&path, "[logger\nname = 1").unwrap();
    assert!(matches!(Config::load_from(&path), Err(Error::ConfigParse(_))));
}

#[test]
fn from_config_builds_sinks() {
    let tmp_dir = TempDir::new().unwrap();
    let log_path = tmp_dir.path().join("app.log");
    let config = Config::parse(&format!(
        r#"
[logger]
name = "configured"
level = "info"
format = "{{level}} {{msg}}"

[[sinks]]
kind = "console"
stream = "stdout"
level = "warning"

[[sinks]]
kind = "file"
path = "{}"
"#,
        log_path.display()
    ))
    .unwrap();

    let registry = Registry::new();
    let logger = Logger::from_config(&registry, &config).unwrap();

    assert_eq!(logger.name(), "configured");
    assert_eq!(logger.threshold(), Level::Info);
    let sinks = logger.sinks();
    assert_eq!(sinks[0].kind, SinkKind::Console(Stream::Stdout));
    assert_eq!(sinks[0].threshold, Level::Warning);
    assert_eq!(sinks[1].kind, SinkKind::File(log_path.clone()));
    assert_eq!(sinks[1].threshold, Level::Info);

    logger.debug("below logger").unwrap();
    logger.info("kept").unwrap();
    assert_eq!(fs::read_to_string(log_path).unwrap(), "INFO kept\n");
}

#[test]
fn from_config_attaches_leveled_set() {
    let tmp_dir = TempDir::new().unwrap();
    let config = Config::parse(&format!(
        r#"
[logger]
name = "leveled_from_config"
leveled_base = "svc"
leveled_dir = "{}"
"#,
        tmp_dir.path().display()
    ))
    .unwrap();

    let logger = Logger::from_config(&Registry::new(), &config).unwrap();

    assert_eq!(logger.sink_count(), 6);
    assert!(tmp_dir.path().join("critical_svc.log").exists());
}

#[test]
fn from_config_rejects_unknown_sink_level() {
    let config = Config::parse(
        r#"
[[sinks]]
kind = "console"
level = "chatty"
"#,
    )
    .unwrap();

    let err = Logger::from_config(&Registry::new(), &config).unwrap_err();
    assert!(matches!(err, Error::InvalidLevel(ref s) if s == "chatty"));
}

#[test]
fn from_config_rejects_unrenderable_timestamp_format() {
    let config = Config::parse(
        r#"
[logger]
name = "bad_timestamp"
level = "error"
timestamp_format = "%Q"

[[sinks]]
kind = "console"
"#,
    )
    .unwrap();

    let registry = Registry::new();
    let err = Logger::from_config(&registry, &config).unwrap_err();

    assert!(matches!(err, Error::InvalidTimestampFormat(ref s) if s == "%Q"));
    assert!(!registry.contains("bad_timestamp"));
}
