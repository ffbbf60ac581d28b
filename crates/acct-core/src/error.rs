use crate::ErrorLocation;

use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Malformed account payload for player {player_id}: {source} {location}")]
    MalformedPayload {
        player_id: String,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Account payload for player {player_id} is missing {field} {location}")]
    MissingField {
        player_id: String,
        field: &'static str,
        location: ErrorLocation,
    },

    #[error("Account payload for player {player_id} is inconsistent: {message} {location}")]
    KeyMismatch {
        player_id: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to serialize account payload: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn malformed_payload(player_id: impl Into<String>, source: serde_json::Error) -> Self {
        Self::MalformedPayload {
            player_id: player_id.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_field(player_id: impl Into<String>, field: &'static str) -> Self {
        Self::MissingField {
            player_id: player_id.into(),
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn key_mismatch(player_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::KeyMismatch {
            player_id: player_id.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CoreError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
