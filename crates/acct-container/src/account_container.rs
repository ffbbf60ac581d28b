//! In-memory account view for one game, derived from the record store.
//!
//! The container never patches its view in place: every write goes through
//! the store and is followed by a full reload and reconciliation. Change
//! notifications go out over a broadcast channel, so subscribers run after
//! the write has finished and cannot re-enter it.

use crate::{AccountChange, AccountError, RejectReason, Result as AccountErrorResult, UpdateOutcome};

use acct_config::ContainerConfig;
use acct_core::{
    AccountBundle, AccountPayload, DroppedRecords, NativeRecord, PlayerRecord, RecentKey,
    RecordKey, Reconciliation, reconcile,
};
use acct_store::{RecordStore, Result as StoreErrorResult};

use std::sync::Arc;

use chrono::Utc;
use log::{debug, error, info, warn};
use tokio::sync::broadcast;

pub struct AccountContainer {
    store: Arc<dyn RecordStore>,
    current_bundle_id: String,
    save_retry_attempts: u32,
    reconciliation: Reconciliation,
    /// Newest `last_updated_at` seen in the store at the last reload
    latest_update: i64,
    changes: broadcast::Sender<AccountChange>,
}

impl AccountContainer {
    pub fn new(
        store: Arc<dyn RecordStore>,
        current_bundle_id: impl Into<String>,
        config: &ContainerConfig,
    ) -> AccountErrorResult<Self> {
        let current_bundle_id = current_bundle_id.into();
        if current_bundle_id.trim().is_empty() {
            return Err(AccountError::configuration("current bundle id is empty"));
        }
        config
            .validate()
            .map_err(|e| AccountError::configuration(e.to_string()))?;

        let (changes, _) = broadcast::channel(config.notification_capacity);

        Ok(Self {
            store,
            current_bundle_id,
            save_retry_attempts: config.save_retry_attempts,
            reconciliation: Reconciliation::default(),
            latest_update: 0,
            changes,
        })
    }

    pub fn current_bundle_id(&self) -> &str {
        &self.current_bundle_id
    }

    /// Rebuilds the account view from the store.
    ///
    /// A store that cannot be read leaves the previous view in place.
    pub fn load(&mut self) {
        if let Err(e) = self.reload() {
            error!(
                "Failed to load accounts for {}, keeping previous view: {e}",
                self.current_bundle_id
            );
        }
    }

    /// Persists `bundle` as the account in use for the current game and
    /// makes it the recent account.
    ///
    /// Invalid bundles are rejected without touching the store. Only an
    /// empty account list after every save attempt is an error.
    pub fn update_recent_account(
        &mut self,
        bundle: &AccountBundle,
    ) -> AccountErrorResult<UpdateOutcome> {
        let player = match self.check_update(bundle) {
            Ok(player) => player,
            Err(reason) => {
                warn!(
                    "Rejected recent account update for identity {:?} in {}: {reason}",
                    bundle.user.id, self.current_bundle_id
                );
                return Ok(UpdateOutcome::Rejected(reason));
            }
        };

        let mut payload =
            AccountPayload::new(bundle.user.clone(), player.clone(), bundle.credential.clone());
        payload.link_owner(&player.id)?;

        let record = NativeRecord {
            player_id: player.id.clone(),
            game_id: player.game_id.clone(),
            raw_payload: payload.encode()?,
            last_updated_at: Utc::now().timestamp_millis().max(self.latest_update + 1),
        };

        let previous = self.recent_key();
        let attempts = self.save_retry_attempts + 1;
        let mut saved = false;

        for attempt in 1..=attempts {
            if let Err(e) = self.store.put(&record) {
                warn!(
                    "Failed to save account {} (attempt {attempt}/{attempts}): {e}",
                    record.key()
                );
            }

            match self.reload() {
                Ok(()) if !self.reconciliation.is_empty() => {
                    saved = true;
                    break;
                }
                Ok(()) => warn!(
                    "No accounts after saving {} (attempt {attempt}/{attempts})",
                    record.key()
                ),
                Err(e) => warn!(
                    "Failed to reload accounts after saving {} (attempt {attempt}/{attempts}): {e}",
                    record.key()
                ),
            }
        }

        if !saved {
            error!(
                "Account storage exhausted for {}, refusing unpersisted session",
                self.current_bundle_id
            );
            return Err(AccountError::account_storage(
                self.current_bundle_id.clone(),
                attempts,
            ));
        }

        let current = self.recent_key();
        if current != previous {
            self.notify(self.reconciliation.recent().cloned(), previous);
        }

        Ok(UpdateOutcome::Applied)
    }

    /// Deletes every current-game record known to this container and clears
    /// the in-memory view, even if some deletes fail.
    ///
    /// Returns the number of records removed from the store.
    pub fn reset_accounts(&mut self) -> usize {
        let keys: Vec<RecordKey> = self
            .reconciliation
            .bundles()
            .iter()
            .flat_map(|b| b.player_accounts.iter())
            .filter(|p| p.bundle_id == self.current_bundle_id)
            .map(|p| RecordKey::new(p.id.clone(), p.game_id.clone()))
            .collect();

        let mut removed = 0;
        for key in &keys {
            match self.store.delete(key) {
                Ok(count) => removed += count,
                Err(e) => warn!("Failed to delete account {key} during reset: {e}"),
            }
        }

        let previous = self.recent_key();
        self.reconciliation = Reconciliation::default();
        info!(
            "Reset accounts for {}: removed {removed} of {} records",
            self.current_bundle_id,
            keys.len()
        );

        if previous.is_some() {
            self.notify(None, previous);
        }

        removed
    }

    /// Deletes the recent account's current-game record and leaves no
    /// account recent, so the caller goes back through account selection.
    ///
    /// Returns false when there was no recent account.
    pub fn delete_recent_account(&mut self) -> bool {
        let Some(recent) = self.reconciliation.recent() else {
            debug!("No recent account to delete for {}", self.current_bundle_id);
            return false;
        };
        let previous = Some(recent.recent_key());
        let Some(key) = recent
            .player
            .as_ref()
            .map(|p| RecordKey::new(p.id.clone(), p.game_id.clone()))
        else {
            return false;
        };

        if let Err(e) = self.store.delete(&key) {
            warn!("Failed to delete recent account {key}: {e}");
        }

        self.load();
        self.reconciliation.clear_recent();
        self.notify(None, previous);

        true
    }

    pub fn accounts(&self) -> &[AccountBundle] {
        self.reconciliation.bundles()
    }

    pub fn current_game_accounts(&self) -> &[AccountBundle] {
        self.reconciliation.current_game()
    }

    pub fn other_games_accounts(&self) -> &[AccountBundle] {
        self.reconciliation.other_games()
    }

    pub fn recent_account(&self) -> Option<&AccountBundle> {
        self.reconciliation.recent()
    }

    /// Identity owning the player record `player_id`.
    pub fn owner_of(&self, player_id: &str) -> Option<&AccountBundle> {
        self.reconciliation.owner_of(player_id)
    }

    pub fn find_by_player_id(&self, player_id: &str) -> Option<&PlayerRecord> {
        self.owner_of(player_id)
            .and_then(|bundle| bundle.find_player(player_id))
    }

    /// Records skipped by the last reload.
    pub fn dropped_records(&self) -> DroppedRecords {
        self.reconciliation.dropped()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AccountChange> {
        self.changes.subscribe()
    }

    fn reload(&mut self) -> StoreErrorResult<()> {
        let records = self.store.get_all()?;
        self.latest_update = records
            .iter()
            .map(|r| r.last_updated_at)
            .max()
            .unwrap_or(0);
        self.reconciliation = reconcile(&records, &self.current_bundle_id);

        let dropped = self.reconciliation.dropped();
        debug!(
            "Loaded {} accounts for {} from {} records ({} dropped)",
            self.reconciliation.len(),
            self.current_bundle_id,
            records.len(),
            dropped.total()
        );
        Ok(())
    }

    fn recent_key(&self) -> Option<RecentKey> {
        self.reconciliation.recent().map(AccountBundle::recent_key)
    }

    fn check_update<'a>(
        &self,
        bundle: &'a AccountBundle,
    ) -> std::result::Result<&'a PlayerRecord, RejectReason> {
        let player = bundle.player.as_ref().ok_or(RejectReason::NoCurrentPlayer)?;

        if player.bundle_id != self.current_bundle_id {
            return Err(RejectReason::BundleMismatch);
        }
        if bundle.user.id.is_empty() {
            return Err(RejectReason::MissingField("user.id"));
        }
        if player.id.is_empty() {
            return Err(RejectReason::MissingField("player.id"));
        }
        if player.game_id.is_empty() {
            return Err(RejectReason::MissingField("player.gameId"));
        }
        if bundle.credential.provider.is_empty() {
            return Err(RejectReason::MissingField("credential.provider"));
        }
        if !player.user_id.is_empty() && player.user_id != bundle.user.id {
            return Err(RejectReason::ForeignOwner);
        }

        Ok(player)
    }

    fn notify(&self, account: Option<AccountBundle>, previous: Option<RecentKey>) {
        let change = AccountChange { account, previous };
        match self.changes.send(change) {
            Ok(receivers) => debug!(
                "Published account change for {} ({receivers} receivers)",
                self.current_bundle_id
            ),
            Err(_) => debug!(
                "Account change for {} had no active receivers",
                self.current_bundle_id
            ),
        }
    }
}
