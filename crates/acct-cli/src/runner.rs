//! Executes parsed commands against the on-disk record stores.

use crate::account_commands::AccountCommands;
use crate::commands::Commands;
use crate::error::{CliError, Result as CliErrorResult};
use crate::storage_commands::StorageCommands;

use acct_config::{Config, ContainerConfig};
use acct_container::{AccountContainer, UpdateOutcome};
use acct_core::{AccountBundle, LoginResponse};
use acct_store::{
    FailoverConfig, FallbackRecordStore, FileMedium, FsStorageBridge, NativeRecordStore,
    OperationKind, RecordStore, ResilientRecordStore,
};

use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::info;
use serde_json::{Map, Value, json};

pub struct Runner {
    store: Arc<ResilientRecordStore>,
    container_config: ContainerConfig,
    primary_dir: PathBuf,
    fallback_dir: PathBuf,
}

impl Runner {
    /// Opens the stores under the configured directories.
    pub fn open(config: &Config) -> CliErrorResult<Self> {
        Self::from_dirs(config.primary_dir()?, config.fallback_dir()?, config)
    }

    pub fn from_dirs(
        primary_dir: PathBuf,
        fallback_dir: PathBuf,
        config: &Config,
    ) -> CliErrorResult<Self> {
        let bridge = FsStorageBridge::open(&primary_dir)?;
        let medium = FileMedium::open(&fallback_dir)?;

        let store = ResilientRecordStore::new(
            Box::new(NativeRecordStore::new(bridge)),
            FallbackRecordStore::new(Arc::new(medium)),
            FailoverConfig {
                failure_threshold: config.storage.failure_threshold,
                mirror_writes: config.storage.mirror_writes,
            },
        );

        Ok(Self {
            store: Arc::new(store),
            container_config: config.container.clone(),
            primary_dir,
            fallback_dir,
        })
    }

    pub fn execute(&self, command: Commands) -> CliErrorResult<Value> {
        match command {
            Commands::Accounts { action } => self.execute_accounts(action),
            Commands::Storage { action } => match action {
                StorageCommands::Status => Ok(self.storage_status()),
            },
        }
    }

    fn execute_accounts(&self, action: AccountCommands) -> CliErrorResult<Value> {
        match action {
            AccountCommands::List { bundle_id } => {
                let container = self.container(&bundle_id)?;
                let dropped = container.dropped_records();
                Ok(json!({
                    "bundleId": bundle_id,
                    "accounts": container.accounts().iter().map(account_summary).collect::<Vec<_>>(),
                    "dropped": {
                        "malformed": dropped.malformed,
                        "duplicate": dropped.duplicate,
                        "foreignGuest": dropped.foreign_guest,
                    },
                }))
            }
            AccountCommands::Recent { bundle_id } => {
                let container = self.container(&bundle_id)?;
                Ok(json!({
                    "bundleId": bundle_id,
                    "recent": container.recent_account().map(account_summary),
                }))
            }
            AccountCommands::Login {
                bundle_id,
                response,
            } => {
                let account = read_login_response(&response)?.into_account();
                let mut container = self.container(&bundle_id)?;

                let outcome = container.update_recent_account(&account)?;
                let (applied, reason) = match outcome {
                    UpdateOutcome::Applied => (true, None),
                    UpdateOutcome::Rejected(reason) => (false, Some(reason.to_string())),
                };
                if applied {
                    info!("Saved login for {} in {bundle_id}", account.user.id);
                }

                Ok(json!({
                    "bundleId": bundle_id,
                    "applied": applied,
                    "reason": reason,
                    "recent": container.recent_account().map(account_summary),
                }))
            }
            AccountCommands::Reset { bundle_id } => {
                let mut container = self.container(&bundle_id)?;
                let removed = container.reset_accounts();
                Ok(json!({ "bundleId": bundle_id, "removed": removed }))
            }
            AccountCommands::DeleteRecent { bundle_id } => {
                let mut container = self.container(&bundle_id)?;
                let deleted = container.delete_recent_account();
                Ok(json!({
                    "bundleId": bundle_id,
                    "deleted": deleted,
                    "remaining": container.accounts().len(),
                }))
            }
        }
    }

    fn storage_status(&self) -> Value {
        let failures: Map<String, Value> = OperationKind::ALL
            .iter()
            .map(|op| (op.as_str().to_string(), json!(self.store.failure_count(*op))))
            .collect();

        json!({
            "usesFallback": self.store.uses_fallback(),
            "failureThreshold": self.store.config().failure_threshold,
            "mirrorWrites": self.store.config().mirror_writes,
            "failures": failures,
            "fallbackRecords": self.store.fallback().len(),
            "primaryDir": self.primary_dir.display().to_string(),
            "fallbackDir": self.fallback_dir.display().to_string(),
        })
    }

    fn container(&self, bundle_id: &str) -> CliErrorResult<AccountContainer> {
        let store: Arc<dyn RecordStore> = self.store.clone();
        let mut container = AccountContainer::new(store, bundle_id, &self.container_config)?;
        container.load();
        Ok(container)
    }
}

fn read_login_response(path: &Path) -> CliErrorResult<LoginResponse> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| CliError::input(path, format!("cannot read file: {e}")))?;
    serde_json::from_str(&contents).map_err(|e| CliError::input(path, e.to_string()))
}

/// Account fields safe to print; tokens are left out.
fn account_summary(bundle: &AccountBundle) -> Value {
    let players: Vec<Value> = bundle
        .player_accounts
        .iter()
        .map(|p| {
            json!({
                "id": p.id,
                "gameId": p.game_id,
                "bundleId": p.bundle_id,
                "username": p.username,
            })
        })
        .collect();

    json!({
        "identityId": bundle.user.id,
        "nickname": bundle.user.nickname,
        "provider": bundle.credential.provider,
        "isGuest": bundle.is_guest,
        "isRecent": bundle.is_recent,
        "lastUsed": bundle.last_used,
        "playerId": bundle.player_id(),
        "players": players,
    })
}
