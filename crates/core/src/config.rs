//! Process configuration.
//!
//! Values come from the environment; anything unset falls back to the
//! defaults the data and log files have always used.

use std::path::PathBuf;

use thiserror::Error;

pub const DATA_FILE_VAR: &str = "STOCKROOM_DATA_FILE";
pub const LOG_FILE_VAR: &str = "STOCKROOM_LOG_FILE";
pub const LOW_STOCK_THRESHOLD_VAR: &str = "STOCKROOM_LOW_STOCK_THRESHOLD";

pub const DEFAULT_DATA_FILE: &str = "inventory.json";
pub const DEFAULT_LOG_FILE: &str = "inventory.log";
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?} ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime configuration for the inventory tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryConfig {
    /// JSON file holding the persisted stock table.
    pub data_path: PathBuf,
    /// Append-only action log.
    pub log_path: PathBuf,
    /// Items below this quantity are reported as low.
    pub low_stock_threshold: i64,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            log_path: PathBuf::from(DEFAULT_LOG_FILE),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl InventoryConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = non_empty(lookup(DATA_FILE_VAR)) {
            config.data_path = PathBuf::from(path);
        }
        if let Some(path) = non_empty(lookup(LOG_FILE_VAR)) {
            config.log_path = PathBuf::from(path);
        }
        if let Some(raw) = non_empty(lookup(LOW_STOCK_THRESHOLD_VAR)) {
            config.low_stock_threshold = raw.trim().parse::<i64>().map_err(|e| ConfigError::Invalid {
                var: LOW_STOCK_THRESHOLD_VAR,
                value: raw.clone(),
                reason: e.to_string(),
            })?;
        }

        tracing::debug!(
            data_path = %config.data_path.display(),
            log_path = %config.log_path.display(),
            low_stock_threshold = config.low_stock_threshold,
            "configuration resolved"
        );

        Ok(config)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
