mod config;
mod container_config;
mod error;
mod log_level;
mod logging_config;
mod storage_config;

pub use config::Config;
pub use container_config::{
    ContainerConfig, DEFAULT_NOTIFICATION_CAPACITY, DEFAULT_SAVE_RETRY_ATTEMPTS,
    MAX_NOTIFICATION_CAPACITY, MAX_SAVE_RETRY_ATTEMPTS, MIN_NOTIFICATION_CAPACITY,
};
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::{
    DEFAULT_FAILURE_THRESHOLD, DEFAULT_MIRROR_WRITES, MAX_FAILURE_THRESHOLD,
    MIN_FAILURE_THRESHOLD, StorageConfig,
};

const CONFIG_DIR_ENV: &str = "ACCT_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".acct";
const CONFIG_FILE_NAME: &str = "config.toml";
const DEFAULT_PRIMARY_DIR: &str = "records";
const DEFAULT_FALLBACK_DIR: &str = "fallback";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;

#[cfg(test)]
mod tests;
