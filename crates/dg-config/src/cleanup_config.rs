use crate::{ConfigError, ConfigErrorResult, DEFAULT_CLEANUP_INTERVAL_HOURS};

use serde::Deserialize;

/// Periodic credential sweep settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CleanupConfig {
    pub enabled: bool,
    /// Sweep period. Defaults to roughly once a month.
    pub interval_hours: u64,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_hours: DEFAULT_CLEANUP_INTERVAL_HOURS,
        }
    }
}

impl CleanupConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.enabled && self.interval_hours == 0 {
            return Err(ConfigError::config(
                "cleanup.interval_hours must be > 0 when cleanup is enabled",
            ));
        }

        Ok(())
    }
}
