pub mod fs_storage_bridge;
pub mod native_record_store;
pub mod native_storage_bridge;
