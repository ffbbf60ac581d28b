use crate::Result as StoreErrorResult;

use acct_core::{NativeRecord, RecordKey};

use std::sync::Arc;

/// Key-addressed store of native records.
///
/// Implementations are shared between account containers, so every method
/// takes `&self`.
pub trait RecordStore: Send + Sync {
    fn get_all(&self) -> StoreErrorResult<Vec<NativeRecord>>;

    fn get_one(&self, key: &RecordKey) -> StoreErrorResult<Option<NativeRecord>>;

    /// Inserts or wholesale replaces the record at `record.key()`.
    fn put(&self, record: &NativeRecord) -> StoreErrorResult<()>;

    /// Returns the number of records removed.
    fn delete(&self, key: &RecordKey) -> StoreErrorResult<usize>;
}

impl<S: RecordStore + ?Sized> RecordStore for Arc<S> {
    fn get_all(&self) -> StoreErrorResult<Vec<NativeRecord>> {
        (**self).get_all()
    }

    fn get_one(&self, key: &RecordKey) -> StoreErrorResult<Option<NativeRecord>> {
        (**self).get_one(key)
    }

    fn put(&self, record: &NativeRecord) -> StoreErrorResult<()> {
        (**self).put(record)
    }

    fn delete(&self, key: &RecordKey) -> StoreErrorResult<usize> {
        (**self).delete(key)
    }
}
