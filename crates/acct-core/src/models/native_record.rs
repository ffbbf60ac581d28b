use crate::RecordKey;

use serde::{Deserialize, Serialize};

/// Raw persisted unit, one per (player, game) pair seen on the device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeRecord {
    pub player_id: String,
    pub game_id: String,
    /// Serialized `AccountPayload`
    pub raw_payload: String,
    /// Unix epoch milliseconds
    pub last_updated_at: i64,
}

impl NativeRecord {
    pub fn key(&self) -> RecordKey {
        RecordKey::new(self.player_id.clone(), self.game_id.clone())
    }

    pub fn has_key(&self, key: &RecordKey) -> bool {
        self.player_id == key.player_id && self.game_id == key.game_id
    }
}
