//! Runs as its own test binary because the default setup writes into the working directory.
#![cfg(feature = "cli")]

use clap::Parser;
use commonlog::cli::{Cli, build_logger, run_demo};
use commonlog::{Config, Level, SinkKind, Stream};
use std::env;
use std::fs;
use tempfile::TempDir;

#[test]
fn default_run_writes_leveled_simple_files() {
    let tmp_dir = TempDir::new().unwrap();
    env::set_current_dir(tmp_dir.path()).unwrap();

    let cli = Cli::parse_from(["commonlog"]);
    let logger = build_logger(&cli, None).unwrap();

    assert_eq!(logger.name(), "test_logger");
    assert_eq!(logger.threshold(), Level::Debug);
    assert_eq!(logger.sink_count(), 6);

    run_demo(&logger).unwrap();

    let lines = |level: &str| {
        fs::read_to_string(tmp_dir.path().join(format!("{level}_simple.log")))
            .unwrap()
            .lines()
            .count()
    };
    // Six messages: one per severity plus a closing info line.
    assert_eq!(lines("debug"), 6);
    assert_eq!(lines("info"), 5);
    assert_eq!(lines("warning"), 3);
    assert_eq!(lines("error"), 2);
    assert_eq!(lines("critical"), 1);
}

#[test]
fn level_flag_with_config_keeps_sink_floors() {
    let tmp_dir = TempDir::new().unwrap();
    let log_path = tmp_dir.path().join("cli.log");
    let config = Config::parse(&format!(
        r#"
[logger]
name = "cli_configured"
level = "debug"

[[sinks]]
kind = "console"
stream = "stdout"
level = "critical"

[[sinks]]
kind = "file"
path = "{}"
level = "error"
format = "{{level}} {{msg}}"
"#,
        log_path.display()
    ))
    .unwrap();

    let cli = Cli::parse_from(["commonlog", "--level", "warning"]);
    let logger = build_logger(&cli, Some(&config)).unwrap();

    assert_eq!(logger.threshold(), Level::Warning);
    let sinks = logger.sinks();
    assert_eq!(sinks[0].kind, SinkKind::Console(Stream::Stdout));
    assert_eq!(sinks[0].threshold, Level::Critical);
    assert_eq!(sinks[1].threshold, Level::Error);

    run_demo(&logger).unwrap();
    assert_eq!(
        fs::read_to_string(log_path).unwrap(),
        "ERROR Error now...\nCRITICAL Critical now...\n"
    );
}
