use acct_core::{CoreError, ErrorLocation};

use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AccountError {
    /// Nothing could be persisted for the current game, so no session can
    /// be backed by storage.
    #[error(
        "Account storage unavailable for {bundle_id}: no accounts after {attempts} save attempts {location}"
    )]
    AccountStorage {
        bundle_id: String,
        attempts: u32,
        location: ErrorLocation,
    },

    #[error("Failed to encode account payload: {source} {location}")]
    Payload {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Invalid account container configuration: {message} {location}")]
    Configuration {
        message: String,
        location: ErrorLocation,
    },
}

impl AccountError {
    #[track_caller]
    pub fn account_storage(bundle_id: impl Into<String>, attempts: u32) -> Self {
        Self::AccountStorage {
            bundle_id: bundle_id.into(),
            attempts,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::AccountStorage { .. })
    }
}

impl From<CoreError> for AccountError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Payload {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, AccountError>;
