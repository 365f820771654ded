use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Claim set carried by a service-to-service credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceClaims {
    pub iss: String,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    pub sub: String,
    pub scope: String,
}

impl ServiceClaims {
    pub fn new(issuer: &str, scope: &str, ttl_mins: u64) -> Self {
        let now = Utc::now();
        let expires = now + Duration::minutes(ttl_mins as i64);

        Self {
            iss: issuer.to_string(),
            iat: now.timestamp(),
            exp: expires.timestamp(),
            sub: "security-service".to_string(),
            scope: scope.to_string(),
        }
    }
}
