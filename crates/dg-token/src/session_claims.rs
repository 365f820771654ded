use dg_core::Identity;

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Claim set carried by a session credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (identity email)
    pub sub: String,
    pub iss: String,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Granted authorities
    #[serde(default)]
    pub scope: Vec<String>,
    pub name: String,
    pub username: String,
    pub id: i64,
}

impl SessionClaims {
    /// Build the claim set for an identity, valid from now for `ttl_mins`.
    pub fn for_identity(identity: &Identity, issuer: &str, ttl_mins: u64) -> Self {
        let now = Utc::now();
        let expires = now + Duration::minutes(ttl_mins as i64);

        Self {
            sub: identity.email.clone(),
            iss: issuer.to_string(),
            iat: now.timestamp(),
            exp: expires.timestamp(),
            scope: identity.roles.clone(),
            name: identity.name.clone(),
            username: identity.username.clone(),
            id: identity.id,
        }
    }
}
