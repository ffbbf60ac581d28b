use crate::{Result as StoreErrorResult, StorageMedium};

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Process-local medium, for tests and platforms without a writable disk.
#[derive(Debug, Default)]
pub struct MemoryMedium {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryMedium {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let medium = Self::new();
        medium.insert(key, value);
        medium
    }

    fn insert(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }
}

impl StorageMedium for MemoryMedium {
    fn read(&self, key: &str) -> StoreErrorResult<Option<String>> {
        Ok(self
            .values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned())
    }

    fn write(&self, key: &str, value: &str) -> StoreErrorResult<()> {
        self.insert(key, value);
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreErrorResult<()> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}
