//! Always-available backup store.
//!
//! Records live in an in-memory cache that is written through to a
//! [`StorageMedium`] under two stable keys: the serialized record array and
//! the one-way "use fallback" flag. A medium that cannot be read leaves the
//! store empty rather than unavailable.

use crate::{RecordStore, Result as StoreErrorResult, StorageMedium};

use acct_core::{NativeRecord, RecordKey};

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{error, info, warn};

/// Medium key holding the `NativeRecord` array.
pub const RECORDS_KEY: &str = "accounts.records";
/// Medium key holding the boolean failover flag.
pub const USE_FALLBACK_KEY: &str = "accounts.use_fallback";

pub struct FallbackRecordStore {
    medium: Arc<dyn StorageMedium>,
    cache: Mutex<Vec<NativeRecord>>,
}

impl FallbackRecordStore {
    pub fn new(medium: Arc<dyn StorageMedium>) -> Self {
        let records = Self::load_records(medium.as_ref());
        Self {
            medium,
            cache: Mutex::new(records),
        }
    }

    fn load_records(medium: &dyn StorageMedium) -> Vec<NativeRecord> {
        let raw = match medium.read(RECORDS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                error!("Fallback records unreadable, starting empty: {e}");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<NativeRecord>>(&raw) {
            Ok(records) => {
                info!("Loaded {} fallback records", records.len());
                records
            }
            Err(e) => {
                warn!("Fallback records corrupted, starting empty: {e}");
                if let Err(e) = medium.backup_corrupted(RECORDS_KEY) {
                    error!("Failed to back up corrupted fallback records: {e}");
                }
                Vec::new()
            }
        }
    }

    /// Reads the persisted failover flag; anything unreadable counts as unset.
    pub fn use_fallback_flag(&self) -> bool {
        match self.medium.read(USE_FALLBACK_KEY) {
            Ok(Some(raw)) => serde_json::from_str::<bool>(raw.trim()).unwrap_or_else(|e| {
                warn!("Ignoring unreadable {USE_FALLBACK_KEY} value {raw:?}: {e}");
                false
            }),
            Ok(None) => false,
            Err(e) => {
                warn!("Failed to read {USE_FALLBACK_KEY}: {e}");
                false
            }
        }
    }

    pub fn set_use_fallback_flag(&self, value: bool) -> StoreErrorResult<()> {
        self.medium
            .write(USE_FALLBACK_KEY, if value { "true" } else { "false" })
    }

    pub fn len(&self) -> usize {
        self.cache().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache().is_empty()
    }

    /// Replaces every cached record with `records`, skipping the write when
    /// nothing changed.
    pub fn replace_all(&self, records: &[NativeRecord]) -> StoreErrorResult<()> {
        let mut cache = self.cache();
        if cache.as_slice() == records {
            return Ok(());
        }
        *cache = records.to_vec();
        self.persist(&cache)
    }

    fn cache(&self) -> MutexGuard<'_, Vec<NativeRecord>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn persist(&self, records: &[NativeRecord]) -> StoreErrorResult<()> {
        let json = serde_json::to_string(records)?;
        self.medium.write(RECORDS_KEY, &json)
    }
}

impl RecordStore for FallbackRecordStore {
    fn get_all(&self) -> StoreErrorResult<Vec<NativeRecord>> {
        Ok(self.cache().clone())
    }

    fn get_one(&self, key: &RecordKey) -> StoreErrorResult<Option<NativeRecord>> {
        Ok(self.cache().iter().find(|r| r.has_key(key)).cloned())
    }

    /// The cache is updated even when persisting fails, so the record stays
    /// readable for the life of the process.
    fn put(&self, record: &NativeRecord) -> StoreErrorResult<()> {
        let mut cache = self.cache();
        let key = record.key();
        match cache.iter_mut().find(|r| r.has_key(&key)) {
            Some(existing) => *existing = record.clone(),
            None => cache.push(record.clone()),
        }
        self.persist(&cache)
    }

    fn delete(&self, key: &RecordKey) -> StoreErrorResult<usize> {
        let mut cache = self.cache();
        let before = cache.len();
        cache.retain(|r| !r.has_key(key));
        let removed = before - cache.len();

        if removed > 0 {
            self.persist(&cache)?;
        }
        Ok(removed)
    }
}
