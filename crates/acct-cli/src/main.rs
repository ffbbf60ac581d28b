//! acct - device account store CLI
//!
//! Lists and manages the game accounts persisted on this device and reports
//! the state of the record store.
//!
//! # Examples
//!
//! ```bash
//! # Accounts visible to a game
//! acct accounts list --bundle-id com.studio.game.a --pretty
//!
//! # Save a login response as the recent account
//! acct accounts login --bundle-id com.studio.game.a --response login.json
//!
//! # Failover state
//! acct storage status
//! ```

use acct_cli::{Cli, CliError, Runner, logger};
use acct_config::Config;

use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = setup().and_then(|runner| runner.execute(cli.command));

    match result {
        Ok(value) => print_json(&value, cli.pretty),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn setup() -> Result<Runner, CliError> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file()?,
        config.logging.colored,
    )?;
    config.log_summary();

    Runner::open(&config)
}

fn print_json(value: &Value, pretty: bool) -> ExitCode {
    let output = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };

    match output {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error serializing output: {e}");
            ExitCode::FAILURE
        }
    }
}
