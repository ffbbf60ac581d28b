
use crate::AccountContainer;

use acct_config::ContainerConfig;
use acct_core::{
    AccountBundle, AccountPayload, Credential, GUEST_PROVIDER, NativeRecord, PlayerRecord,
    RecordKey, User,
};
use acct_store::{FallbackRecordStore, MemoryMedium, OperationKind, RecordStore, StoreError};

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub(crate) const GAME_A: &str = "com.studio.game.a";
pub(crate) const GAME_B: &str = "com.studio.game.b";

/// In-memory store that counts writes and can be told to fail them.
pub(crate) struct TestStore {
    inner: FallbackRecordStore,
    puts: AtomicUsize,
    deletes: AtomicUsize,
    fail_puts: AtomicBool,
    fail_next_put: AtomicBool,
    fail_get_all: AtomicBool,
    fail_deletes: Mutex<Vec<String>>,
}

impl TestStore {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: FallbackRecordStore::new(Arc::new(MemoryMedium::new())),
            puts: AtomicUsize::new(0),
            deletes: AtomicUsize::new(0),
            fail_puts: AtomicBool::new(false),
            fail_next_put: AtomicBool::new(false),
            fail_get_all: AtomicBool::new(false),
            fail_deletes: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn with_records(records: &[NativeRecord]) -> Arc<Self> {
        let store = Self::new();
        for record in records {
            store.inner.put(record).unwrap();
        }
        store
    }

    pub(crate) fn fail_puts(&self) {
        self.fail_puts.store(true, Ordering::SeqCst);
    }

    pub(crate) fn fail_next_put(&self) {
        self.fail_next_put.store(true, Ordering::SeqCst);
    }

    pub(crate) fn fail_get_all(&self) {
        self.fail_get_all.store(true, Ordering::SeqCst);
    }

    pub(crate) fn fail_delete_of(&self, player_id: &str) {
        self.fail_deletes.lock().unwrap().push(player_id.to_string());
    }

    pub(crate) fn puts(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }

    pub(crate) fn deletes(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }

    pub(crate) fn records(&self) -> Vec<NativeRecord> {
        self.inner.get_all().unwrap()
    }

    pub(crate) fn contains(&self, player_id: &str) -> bool {
        self.records().iter().any(|r| r.player_id == player_id)
    }
}

impl RecordStore for TestStore {
    fn get_all(&self) -> acct_store::Result<Vec<NativeRecord>> {
        if self.fail_get_all.load(Ordering::SeqCst) {
            return Err(StoreError::bridge(OperationKind::GetAll, "unmounted"));
        }
        self.inner.get_all()
    }

    fn get_one(&self, key: &RecordKey) -> acct_store::Result<Option<NativeRecord>> {
        self.inner.get_one(key)
    }

    fn put(&self, record: &NativeRecord) -> acct_store::Result<()> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        let fail_once = self.fail_next_put.swap(false, Ordering::SeqCst);
        if fail_once || self.fail_puts.load(Ordering::SeqCst) {
            return Err(StoreError::bridge(OperationKind::Put, "disk full"));
        }
        self.inner.put(record)
    }

    fn delete(&self, key: &RecordKey) -> acct_store::Result<usize> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        if self.fail_deletes.lock().unwrap().contains(&key.player_id) {
            return Err(StoreError::bridge(OperationKind::Delete, "locked"));
        }
        self.inner.delete(key)
    }
}

pub(crate) fn container(store: &Arc<TestStore>, bundle_id: &str) -> AccountContainer {
    let store: Arc<dyn RecordStore> = store.clone();
    AccountContainer::new(store, bundle_id, &ContainerConfig::default()).unwrap()
}

pub(crate) fn loaded(store: &Arc<TestStore>, bundle_id: &str) -> AccountContainer {
    let mut container = container(store, bundle_id);
    container.load();
    container
}

pub(crate) fn game_id_for(bundle_id: &str) -> String {
    format!("game-{bundle_id}")
}

pub(crate) fn player(user_id: &str, player_id: &str, bundle_id: &str) -> PlayerRecord {
    PlayerRecord {
        id: player_id.to_string(),
        user_id: user_id.to_string(),
        game_id: game_id_for(bundle_id),
        bundle_id: bundle_id.to_string(),
        access_token: format!("token-{player_id}"),
        ..PlayerRecord::default()
    }
}

pub(crate) fn credential(provider: &str) -> Credential {
    Credential {
        id: format!("cred-{provider}"),
        provider: provider.to_string(),
        display_text: provider.to_string(),
    }
}

pub(crate) fn user(user_id: &str) -> User {
    User {
        id: user_id.to_string(),
        ..User::default()
    }
}

pub(crate) fn record(
    user_id: &str,
    player_id: &str,
    bundle_id: &str,
    provider: &str,
    last_updated_at: i64,
) -> NativeRecord {
    let payload = AccountPayload::new(
        user(user_id),
        player(user_id, player_id, bundle_id),
        credential(provider),
    );

    NativeRecord {
        player_id: player_id.to_string(),
        game_id: game_id_for(bundle_id),
        raw_payload: payload.encode().unwrap(),
        last_updated_at,
    }
}

pub(crate) fn guest_record(
    user_id: &str,
    player_id: &str,
    bundle_id: &str,
    last_updated_at: i64,
) -> NativeRecord {
    record(user_id, player_id, bundle_id, GUEST_PROVIDER, last_updated_at)
}

pub(crate) fn registered_record(
    user_id: &str,
    player_id: &str,
    bundle_id: &str,
    last_updated_at: i64,
) -> NativeRecord {
    record(user_id, player_id, bundle_id, "google", last_updated_at)
}

/// Bundle as the login flow would hand it to the container.
pub(crate) fn login_bundle(user_id: &str, player_id: &str, bundle_id: &str) -> AccountBundle {
    let player = player(user_id, player_id, bundle_id);
    AccountBundle {
        user: user(user_id),
        credential: credential("google"),
        player: Some(player.clone()),
        player_accounts: vec![player],
        last_used: 0,
        is_guest: false,
        is_recent: false,
    }
}
