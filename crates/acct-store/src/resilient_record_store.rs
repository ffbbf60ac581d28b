//! Primary store with one-way failover to the fallback store.

use crate::{
    FailureTracker, FallbackRecordStore, OperationKind, RecordStore, Result as StoreErrorResult,
};

use acct_core::{NativeRecord, RecordKey};

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{debug, error, info, warn};

pub const DEFAULT_FAILURE_THRESHOLD: u32 = 2;
pub const DEFAULT_MIRROR_WRITES: bool = true;

#[derive(Debug, Clone)]
pub struct FailoverConfig {
    /// Consecutive failures of one operation kind before failing over
    pub failure_threshold: u32,
    /// Copy successful primary writes into the fallback store
    pub mirror_writes: bool,
}

impl Default for FailoverConfig {
    fn default() -> Self {
        Self {
            failure_threshold: DEFAULT_FAILURE_THRESHOLD,
            mirror_writes: DEFAULT_MIRROR_WRITES,
        }
    }
}

/// A write the primary missed and the fallback absorbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingWrite {
    Put,
    Delete,
}

/// Routes every call to the primary until it fails `failure_threshold` times
/// in a row for one operation kind, then pins all calls to the fallback.
///
/// The failover flag is read from the fallback medium once, at construction,
/// and written back when it trips. A failed primary call is answered by the
/// fallback, so callers never see primary errors.
///
/// Before failover, a write the primary rejected is remembered as pending:
/// reads served by the primary overlay it, and the next successful
/// `get_all` replays it into the primary. With mirroring enabled each
/// successful primary `get_all` also becomes the fallback's snapshot, so
/// records written by other processes survive failover. Pending writes live
/// in memory only.
pub struct ResilientRecordStore {
    primary: Box<dyn RecordStore>,
    fallback: FallbackRecordStore,
    tracker: FailureTracker,
    config: FailoverConfig,
    pending: Mutex<HashMap<RecordKey, PendingWrite>>,
}

impl ResilientRecordStore {
    pub fn new(
        primary: Box<dyn RecordStore>,
        fallback: FallbackRecordStore,
        config: FailoverConfig,
    ) -> Self {
        let tracker = FailureTracker::new(config.failure_threshold);

        if fallback.use_fallback_flag() {
            tracker.trip();
            info!("Record storage pinned to fallback by persisted flag");
        }

        Self {
            primary,
            fallback,
            tracker,
            config,
            pending: Mutex::new(HashMap::new()),
        }
    }

    pub fn uses_fallback(&self) -> bool {
        self.tracker.is_tripped()
    }

    pub fn failure_count(&self, operation: OperationKind) -> u32 {
        self.tracker.failure_count(operation)
    }

    pub fn fallback(&self) -> &FallbackRecordStore {
        &self.fallback
    }

    pub fn config(&self) -> &FailoverConfig {
        &self.config
    }

    /// Number of writes the primary has not yet accepted.
    pub fn pending_writes(&self) -> usize {
        self.pending().len()
    }

    fn route<T>(
        &self,
        operation: OperationKind,
        on_primary: impl FnOnce(&dyn RecordStore) -> StoreErrorResult<T>,
        on_fallback: impl FnOnce(&FallbackRecordStore) -> StoreErrorResult<T>,
    ) -> StoreErrorResult<T> {
        if self.tracker.is_tripped() {
            return on_fallback(&self.fallback);
        }

        match on_primary(self.primary.as_ref()) {
            Ok(value) => {
                self.tracker.record_success(operation);
                Ok(value)
            }
            Err(e) => {
                warn!("Primary record store {operation} failed, serving from fallback: {e}");
                if self.tracker.record_failure(operation) {
                    self.fail_over(operation);
                }
                on_fallback(&self.fallback)
            }
        }
    }

    fn fail_over(&self, operation: OperationKind) {
        error!(
            "Primary record store failed {} consecutive {operation} calls, switching to fallback permanently",
            self.tracker.threshold()
        );

        if let Err(e) = self.fallback.set_use_fallback_flag(true) {
            error!("Failed to persist fallback flag, failover lasts until restart: {e}");
        }

        // The fallback is authoritative from here on.
        self.pending().clear();
    }

    fn pending(&self) -> MutexGuard<'_, HashMap<RecordKey, PendingWrite>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn defer(&self, key: RecordKey, write: PendingWrite) {
        if self.tracker.is_tripped() {
            return;
        }
        debug!("Deferring {write:?} of {key} until the primary recovers");
        self.pending().insert(key, write);
    }

    fn settle(&self, key: &RecordKey) {
        self.pending().remove(key);
    }

    /// Pushes pending writes into the primary. Failures keep the write
    /// pending and do not count towards failover.
    fn replay_pending(&self, primary: &dyn RecordStore) {
        let mut pending = self.pending();
        if pending.is_empty() {
            return;
        }

        pending.retain(|key, write| {
            let replayed = match write {
                PendingWrite::Put => match self.fallback.get_one(key) {
                    Ok(Some(record)) => primary.put(&record),
                    Ok(None) => return false,
                    Err(e) => Err(e),
                },
                PendingWrite::Delete => primary.delete(key).map(|_| ()),
            };

            match replayed {
                Ok(()) => {
                    info!("Replayed pending {write:?} of {key} into primary record store");
                    false
                }
                Err(e) => {
                    warn!("Pending {write:?} of {key} still rejected by primary: {e}");
                    true
                }
            }
        });
    }

    /// Applies still-pending writes on top of a primary snapshot.
    fn overlay_pending(&self, mut records: Vec<NativeRecord>) -> Vec<NativeRecord> {
        let pending = self.pending();

        for (key, write) in pending.iter() {
            records.retain(|r| !r.has_key(key));
            if *write == PendingWrite::Put
                && let Ok(Some(record)) = self.fallback.get_one(key)
            {
                records.push(record);
            }
        }
        records
    }

    fn sync_fallback(&self, records: &[NativeRecord]) {
        if !self.config.mirror_writes {
            return;
        }
        if let Err(e) = self.fallback.replace_all(records) {
            warn!("Failed to refresh fallback snapshot: {e}");
        }
    }

    fn mirror<T>(
        &self,
        operation: OperationKind,
        write: impl FnOnce(&FallbackRecordStore) -> StoreErrorResult<T>,
    ) {
        if !self.config.mirror_writes {
            return;
        }
        if let Err(e) = write(&self.fallback) {
            warn!("Failed to mirror {operation} into fallback store: {e}");
        }
    }
}

impl RecordStore for ResilientRecordStore {
    fn get_all(&self) -> StoreErrorResult<Vec<NativeRecord>> {
        self.route(
            OperationKind::GetAll,
            |p| {
                self.replay_pending(p);
                let records = self.overlay_pending(p.get_all()?);
                self.sync_fallback(&records);
                Ok(records)
            },
            |f| f.get_all(),
        )
    }

    fn get_one(&self, key: &RecordKey) -> StoreErrorResult<Option<NativeRecord>> {
        self.route(
            OperationKind::GetOne,
            |p| {
                let record = p.get_one(key)?;
                let pending = self.pending().get(key).copied();
                match pending {
                    Some(PendingWrite::Put) => self.fallback.get_one(key),
                    Some(PendingWrite::Delete) => Ok(None),
                    None => Ok(record),
                }
            },
            |f| f.get_one(key),
        )
    }

    fn put(&self, record: &NativeRecord) -> StoreErrorResult<()> {
        self.route(
            OperationKind::Put,
            |p| {
                p.put(record)?;
                self.settle(&record.key());
                self.mirror(OperationKind::Put, |f| f.put(record));
                Ok(())
            },
            |f| {
                self.defer(record.key(), PendingWrite::Put);
                f.put(record)
            },
        )
    }

    fn delete(&self, key: &RecordKey) -> StoreErrorResult<usize> {
        self.route(
            OperationKind::Delete,
            |p| {
                let removed = p.delete(key)?;
                self.settle(key);
                self.mirror(OperationKind::Delete, |f| f.delete(key));
                Ok(removed)
            },
            |f| {
                self.defer(key.clone(), PendingWrite::Delete);
                f.delete(key)
            },
        )
    }
}
