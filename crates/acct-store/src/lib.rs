pub mod error;
pub mod failure_tracker;
pub mod fallback_record_store;
pub mod medium;
pub mod native;
pub mod operation_kind;
pub mod record_store;
pub mod resilient_record_store;

pub use error::{Result, StoreError};
pub use failure_tracker::FailureTracker;
pub use fallback_record_store::{FallbackRecordStore, RECORDS_KEY, USE_FALLBACK_KEY};
pub use medium::file_medium::FileMedium;
pub use medium::memory_medium::MemoryMedium;
pub use medium::storage_medium::StorageMedium;
pub use native::fs_storage_bridge::FsStorageBridge;
pub use native::native_record_store::NativeRecordStore;
pub use native::native_storage_bridge::NativeStorageBridge;
pub use operation_kind::OperationKind;
pub use record_store::RecordStore;
pub use resilient_record_store::{FailoverConfig, ResilientRecordStore};

#[cfg(test)]
mod tests;
