//! Serialized body of a native record.
//!
//! Decoding is tolerant: unknown fields are ignored and absent fields take
//! their defaults, then the fields reconciliation depends on are checked
//! explicitly. Shapes vary across backend API versions, so a strict schema
//! would drop records that are still usable.

use crate::{CoreError, Credential, NativeRecord, PlayerRecord, Result as CoreErrorResult, User};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountPayload {
    pub user: User,
    pub player: PlayerRecord,
    pub credential: Credential,
}

impl AccountPayload {
    /// Decodes and checks the payload stored in `record`.
    ///
    /// An empty `player.userId` is filled from `user.id`. The player id and
    /// game id must match the record key they were stored under.
    pub fn decode(record: &NativeRecord) -> CoreErrorResult<Self> {
        let mut payload: AccountPayload = serde_json::from_str(&record.raw_payload)
            .map_err(|e| CoreError::malformed_payload(record.player_id.clone(), e))?;

        payload.check_required(&record.player_id)?;

        if payload.player.id != record.player_id {
            return Err(CoreError::key_mismatch(
                record.player_id.clone(),
                format!("payload names player {}", payload.player.id),
            ));
        }

        if !payload.player.game_id.is_empty() && payload.player.game_id != record.game_id {
            return Err(CoreError::key_mismatch(
                record.player_id.clone(),
                format!(
                    "payload names game {}, stored under {}",
                    payload.player.game_id, record.game_id
                ),
            ));
        }

        payload.link_owner(&record.player_id)?;

        Ok(payload)
    }

    /// Serializes the acyclic `{user, player, credential}` triple.
    pub fn encode(&self) -> CoreErrorResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Builds the payload to write for `user` playing as `player`.
    pub fn new(user: User, player: PlayerRecord, credential: Credential) -> Self {
        Self {
            user,
            player,
            credential,
        }
    }

    /// Checks the fields every record needs to be reconciled.
    pub fn check_required(&self, player_id: &str) -> CoreErrorResult<()> {
        if self.user.id.is_empty() {
            return Err(CoreError::missing_field(player_id, "user.id"));
        }
        if self.player.id.is_empty() {
            return Err(CoreError::missing_field(player_id, "player.id"));
        }
        if self.player.bundle_id.is_empty() {
            return Err(CoreError::missing_field(player_id, "player.bundleId"));
        }
        if self.credential.provider.is_empty() {
            return Err(CoreError::missing_field(player_id, "credential.provider"));
        }
        Ok(())
    }

    /// Ties the player record to its owning identity.
    pub fn link_owner(&mut self, player_id: &str) -> CoreErrorResult<()> {
        if self.player.user_id.is_empty() {
            self.player.user_id = self.user.id.clone();
        } else if self.player.user_id != self.user.id {
            return Err(CoreError::key_mismatch(
                player_id,
                format!(
                    "player owned by {}, payload identity is {}",
                    self.player.user_id, self.user.id
                ),
            ));
        }
        Ok(())
    }
}
