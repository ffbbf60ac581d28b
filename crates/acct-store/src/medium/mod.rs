pub mod file_medium;
pub mod memory_medium;
pub mod storage_medium;
