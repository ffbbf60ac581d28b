//! acct-cli library
//!
//! Command definitions and the runner behind the `acct` binary, exported so
//! the binary and tests drive the same code.

pub mod account_commands;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod runner;
pub mod storage_commands;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use error::{CliError, Result};
pub use runner::Runner;
