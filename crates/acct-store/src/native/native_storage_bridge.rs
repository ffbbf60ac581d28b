use crate::Result as StoreErrorResult;

use acct_core::{NativeRecord, RecordKey};

/// Platform storage bridge that physically performs record I/O.
///
/// Every failure is reported as an error and treated the same regardless of
/// cause.
pub trait NativeStorageBridge: Send + Sync {
    fn get_accounts(&self) -> StoreErrorResult<Vec<NativeRecord>>;

    fn get_account(&self, player_id: &str, game_id: &str)
    -> StoreErrorResult<Option<NativeRecord>>;

    fn put_account(&self, record: &NativeRecord) -> StoreErrorResult<()>;

    /// Returns the number of records removed.
    fn delete_account(&self, key: &RecordKey) -> StoreErrorResult<usize>;
}
