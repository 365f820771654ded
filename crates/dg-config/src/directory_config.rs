use crate::{ConfigError, ConfigErrorResult, DEFAULT_DIRECTORY_URL, DEFAULT_OUTBOUND_TIMEOUT_SECS};

use serde::Deserialize;

/// Where the external users/directory service lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_DIRECTORY_URL),
            timeout_secs: DEFAULT_OUTBOUND_TIMEOUT_SECS,
        }
    }
}

impl DirectoryConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::client(format!(
                "directory.base_url must be an http(s) URL, got {}",
                self.base_url
            )));
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::client("directory.timeout_secs must be > 0"));
        }

        Ok(())
    }
}
