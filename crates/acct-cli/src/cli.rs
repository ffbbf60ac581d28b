use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "acct")]
#[command(about = "Inspect and manage game accounts stored on this device")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
