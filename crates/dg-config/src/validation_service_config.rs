use crate::{ConfigError, ConfigErrorResult, DEFAULT_OUTBOUND_TIMEOUT_SECS, DEFAULT_VALIDATION_URL};

use serde::Deserialize;

/// Where the external validation/notification service lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationServiceConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ValidationServiceConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_VALIDATION_URL),
            timeout_secs: DEFAULT_OUTBOUND_TIMEOUT_SECS,
        }
    }
}

impl ValidationServiceConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::client(format!(
                "validation.base_url must be an http(s) URL, got {}",
                self.base_url
            )));
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::client("validation.timeout_secs must be > 0"));
        }

        Ok(())
    }
}
