use acct_config::ConfigError;
use acct_container::AccountError;
use acct_store::StoreError;

use error_location::ErrorLocation;
use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {source} {location}")]
    Config {
        #[source]
        source: ConfigError,
        location: ErrorLocation,
    },

    #[error("Storage error: {source} {location}")]
    Storage {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },

    #[error("Account error: {source} {location}")]
    Account {
        #[source]
        source: AccountError,
        location: ErrorLocation,
    },

    #[error("Invalid input {path}: {message} {location}")]
    Input {
        path: PathBuf,
        message: String,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn input(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        CliError::Input {
            path: path.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        CliError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ConfigError> for CliError {
    #[track_caller]
    fn from(source: ConfigError) -> Self {
        CliError::Config {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StoreError> for CliError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        CliError::Storage {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<AccountError> for CliError {
    #[track_caller]
    fn from(source: AccountError) -> Self {
        CliError::Account {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CliError>;
