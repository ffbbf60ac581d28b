use crate::Result as StoreErrorResult;

/// String key/value medium backing the fallback store.
pub trait StorageMedium: Send + Sync {
    fn read(&self, key: &str) -> StoreErrorResult<Option<String>>;

    fn write(&self, key: &str, value: &str) -> StoreErrorResult<()>;

    fn remove(&self, key: &str) -> StoreErrorResult<()>;

    /// Moves an unreadable value aside so the next write starts clean.
    fn backup_corrupted(&self, key: &str) -> StoreErrorResult<()> {
        self.remove(key)
    }
}
