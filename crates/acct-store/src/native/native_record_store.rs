use crate::{NativeStorageBridge, RecordStore, Result as StoreErrorResult, StoreError};

use acct_core::{NativeRecord, RecordKey};

/// Primary record store over the platform bridge.
pub struct NativeRecordStore<B> {
    bridge: B,
}

impl<B: NativeStorageBridge> NativeRecordStore<B> {
    pub fn new(bridge: B) -> Self {
        Self { bridge }
    }

    pub fn bridge(&self) -> &B {
        &self.bridge
    }
}

impl<B: NativeStorageBridge> RecordStore for NativeRecordStore<B> {
    fn get_all(&self) -> StoreErrorResult<Vec<NativeRecord>> {
        self.bridge.get_accounts()
    }

    fn get_one(&self, key: &RecordKey) -> StoreErrorResult<Option<NativeRecord>> {
        self.bridge.get_account(&key.player_id, &key.game_id)
    }

    fn put(&self, record: &NativeRecord) -> StoreErrorResult<()> {
        if record.player_id.is_empty() || record.game_id.is_empty() {
            return Err(StoreError::invalid_record(
                record.key().to_string(),
                "player id and game id are required",
            ));
        }
        self.bridge.put_account(record)
    }

    fn delete(&self, key: &RecordKey) -> StoreErrorResult<usize> {
        self.bridge.delete_account(key)
    }
}
