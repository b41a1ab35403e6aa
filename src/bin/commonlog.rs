//! Demo binary: creates `test_logger`, attaches the leveled sink set for `simple`
//! and writes one message per severity.
//!
//! Usage:
//!   commonlog                          Leveled files `*_simple.log` in the working directory
//!   commonlog --base-name app          Leveled files `*_app.log`
//!   commonlog --config logging.toml    Logger and sinks from a config file

use clap::Parser;
use commonlog::cli::{Cli, build_logger, run_demo};
use commonlog::config::Config;
use commonlog::internal;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.config.as_deref().map(Config::load_from).transpose() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(config) = &config
        && let Err(e) = internal::init_with_config(config)
    {
        eprintln!("Error in config: {e}");
        return ExitCode::FAILURE;
    }

    let logger = match build_logger(&cli, config.as_ref()) {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("Error setting up logger: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run_demo(&logger) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error writing log: {e}");
            ExitCode::FAILURE
        }
    }
}
