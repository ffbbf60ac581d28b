use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MAX_SAVE_RETRY_ATTEMPTS: u32 = 5;
pub const DEFAULT_SAVE_RETRY_ATTEMPTS: u32 = 1;

pub const MIN_NOTIFICATION_CAPACITY: usize = 1;
pub const MAX_NOTIFICATION_CAPACITY: usize = 1024;
pub const DEFAULT_NOTIFICATION_CAPACITY: usize = 16;

/// Account container behaviour.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// Extra save-then-reload rounds before an empty account list is fatal
    pub save_retry_attempts: u32,
    /// Buffered change notifications per subscriber
    pub notification_capacity: usize,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            save_retry_attempts: DEFAULT_SAVE_RETRY_ATTEMPTS,
            notification_capacity: DEFAULT_NOTIFICATION_CAPACITY,
        }
    }
}

impl ContainerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.save_retry_attempts > MAX_SAVE_RETRY_ATTEMPTS {
            return Err(ConfigError::container(format!(
                "container.save_retry_attempts must be 0-{}, got {}",
                MAX_SAVE_RETRY_ATTEMPTS, self.save_retry_attempts
            )));
        }

        if self.notification_capacity < MIN_NOTIFICATION_CAPACITY
            || self.notification_capacity > MAX_NOTIFICATION_CAPACITY
        {
            return Err(ConfigError::container(format!(
                "container.notification_capacity must be {}-{}, got {}",
                MIN_NOTIFICATION_CAPACITY, MAX_NOTIFICATION_CAPACITY, self.notification_capacity
            )));
        }

        Ok(())
    }
}
