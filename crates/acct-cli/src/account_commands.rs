use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum AccountCommands {
    /// List every account visible to the game, current-game accounts first
    List {
        /// Bundle id of the running game
        #[arg(long)]
        bundle_id: String,
    },
    /// Show the recent account
    Recent {
        #[arg(long)]
        bundle_id: String,
    },
    /// Save a login response and make it the recent account
    Login {
        #[arg(long)]
        bundle_id: String,
        /// File holding the backend login response JSON
        #[arg(long)]
        response: PathBuf,
    },
    /// Delete every account record of the game
    Reset {
        #[arg(long)]
        bundle_id: String,
    },
    /// Delete the recent account's record of the game
    DeleteRecent {
        #[arg(long)]
        bundle_id: String,
    },
}
