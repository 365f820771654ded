use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ISSUER, DEFAULT_PRIVILEGED_ROLE, DEFAULT_SERVICE_SCOPE,
    DEFAULT_SERVICE_TTL_MINS, DEFAULT_SESSION_TTL_MINS,
};

use serde::Deserialize;

/// Token issuance settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IssuerConfig {
    /// Issuer claim stamped on every token this service signs.
    pub name: String,
    /// Role claim that bypasses the device-trust check entirely.
    pub privileged_role: String,
    /// Session credential lifetime in minutes.
    pub session_ttl_mins: u64,
    /// Service-to-service credential lifetime in minutes.
    pub service_ttl_mins: u64,
    /// Scope stamped on service-to-service credentials.
    pub service_scope: String,
}

impl Default for IssuerConfig {
    fn default() -> Self {
        Self {
            name: String::from(DEFAULT_ISSUER),
            privileged_role: String::from(DEFAULT_PRIVILEGED_ROLE),
            session_ttl_mins: DEFAULT_SESSION_TTL_MINS,
            service_ttl_mins: DEFAULT_SERVICE_TTL_MINS,
            service_scope: String::from(DEFAULT_SERVICE_SCOPE),
        }
    }
}

impl IssuerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.name.is_empty() {
            return Err(ConfigError::issuer("issuer.name cannot be empty"));
        }

        if self.privileged_role.is_empty() {
            return Err(ConfigError::issuer("issuer.privileged_role cannot be empty"));
        }

        if self.session_ttl_mins == 0 {
            return Err(ConfigError::issuer("issuer.session_ttl_mins must be > 0"));
        }

        if self.service_ttl_mins == 0 {
            return Err(ConfigError::issuer("issuer.service_ttl_mins must be > 0"));
        }

        Ok(())
    }
}
