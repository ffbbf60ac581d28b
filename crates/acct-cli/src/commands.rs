use crate::{account_commands::AccountCommands, storage_commands::StorageCommands};

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Account operations for one game
    Accounts {
        #[command(subcommand)]
        action: AccountCommands,
    },

    /// Record storage diagnostics
    Storage {
        #[command(subcommand)]
        action: StorageCommands,
    },
}
