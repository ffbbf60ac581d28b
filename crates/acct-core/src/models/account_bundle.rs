//! Reconciled, caller-facing view of one identity.

use crate::{AccountPayload, Credential, PlayerRecord, User};

use serde::{Deserialize, Serialize};

/// `(identity id, current-game player id)` pair that decides whether the
/// recent account changed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecentKey {
    pub identity_id: String,
    pub player_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountBundle {
    pub user: User,
    pub credential: Credential,
    /// Record for the current game, if this identity ever played it
    pub player: Option<PlayerRecord>,
    /// Every record owned by this identity, one per id
    pub player_accounts: Vec<PlayerRecord>,
    /// Newest `lastUpdatedAt` across `player_accounts`, epoch milliseconds
    pub last_used: i64,
    pub is_guest: bool,
    pub is_recent: bool,
}

impl AccountBundle {
    pub fn identity_id(&self) -> &str {
        &self.user.id
    }

    pub fn player_id(&self) -> Option<&str> {
        self.player.as_ref().map(|p| p.id.as_str())
    }

    pub fn recent_key(&self) -> RecentKey {
        RecentKey {
            identity_id: self.user.id.clone(),
            player_id: self.player_id().map(str::to_string),
        }
    }

    pub fn find_player(&self, player_id: &str) -> Option<&PlayerRecord> {
        self.player_accounts.iter().find(|p| p.id == player_id)
    }

    /// Player record for `bundle_id`, if this identity has one.
    pub fn player_for_bundle(&self, bundle_id: &str) -> Option<&PlayerRecord> {
        self.player_accounts.iter().find(|p| p.bundle_id == bundle_id)
    }

    /// Payload that would persist the current-game record.
    pub fn current_payload(&self) -> Option<AccountPayload> {
        self.player.as_ref().map(|player| {
            AccountPayload::new(self.user.clone(), player.clone(), self.credential.clone())
        })
    }
}
