//! Runs as its own test binary because it changes the working directory.

use commonlog::Logger;
use std::env;
use std::fs;
use tempfile::TempDir;

#[test]
fn leveled_sinks_land_in_working_directory() {
    let tmp_dir = TempDir::new().unwrap();
    env::set_current_dir(tmp_dir.path()).unwrap();

    let logger = Logger::create("cwd_logger");
    logger.add_leveled_sinks("simple").unwrap();
    logger.warning("Warning now...").unwrap();

    for (name, expected) in [
        ("debug_simple.log", true),
        ("info_simple.log", true),
        ("warning_simple.log", true),
        ("error_simple.log", false),
        ("critical_simple.log", false),
    ] {
        let content = fs::read_to_string(tmp_dir.path().join(name)).unwrap();
        assert_eq!(content.contains("Warning now..."), expected, "{name}");
    }
}
