use crate::{ConfigError, ConfigErrorResult, DEFAULT_FALLBACK_DIR, DEFAULT_PRIMARY_DIR};

use std::path::Path;

use serde::Deserialize;

pub const MIN_FAILURE_THRESHOLD: u32 = 1;
pub const MAX_FAILURE_THRESHOLD: u32 = 100;
pub const DEFAULT_FAILURE_THRESHOLD: u32 = 2;

pub const DEFAULT_MIRROR_WRITES: bool = true;

/// Record storage and failover configuration.
///
/// The primary directory is what the directory-backed native bridge reads and
/// writes. The fallback directory holds the backup record array and the
/// one-way failover flag.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Consecutive failures of one operation kind before failing over
    pub failure_threshold: u32,
    /// Primary record directory, relative to the config directory
    pub primary_dir: String,
    /// Fallback medium directory, relative to the config directory
    pub fallback_dir: String,
    /// Copy successful primary writes into the fallback store
    pub mirror_writes: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            failure_threshold: DEFAULT_FAILURE_THRESHOLD,
            primary_dir: String::from(DEFAULT_PRIMARY_DIR),
            fallback_dir: String::from(DEFAULT_FALLBACK_DIR),
            mirror_writes: DEFAULT_MIRROR_WRITES,
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.failure_threshold < MIN_FAILURE_THRESHOLD
            || self.failure_threshold > MAX_FAILURE_THRESHOLD
        {
            return Err(ConfigError::storage(format!(
                "storage.failure_threshold must be {}-{}, got {}",
                MIN_FAILURE_THRESHOLD, MAX_FAILURE_THRESHOLD, self.failure_threshold
            )));
        }

        Self::validate_dir("storage.primary_dir", &self.primary_dir)?;
        Self::validate_dir("storage.fallback_dir", &self.fallback_dir)?;

        if self.primary_dir == self.fallback_dir {
            return Err(ConfigError::storage(
                "storage.primary_dir and storage.fallback_dir must differ",
            ));
        }

        Ok(())
    }

    fn validate_dir(name: &str, dir: &str) -> ConfigErrorResult<()> {
        if dir.trim().is_empty() {
            return Err(ConfigError::storage(format!("{name} cannot be empty")));
        }
        if Path::new(dir).is_absolute() || dir.contains("..") {
            return Err(ConfigError::storage(format!(
                "{name} must be relative and cannot contain '..'"
            )));
        }
        Ok(())
    }
}
