use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum StorageCommands {
    /// Show failover state and record counts
    Status,
}
