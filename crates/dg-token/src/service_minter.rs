use crate::{Result as TokenResult, ServiceClaims, TokenCodec};

/// Mints short-lived service-to-service credentials.
///
/// No persistence and no state transitions; safe for unlimited concurrent
/// invocation.
pub struct ServiceTokenMinter {
    codec: TokenCodec,
    issuer: String,
    scope: String,
    ttl_mins: u64,
}

impl ServiceTokenMinter {
    pub fn new(codec: TokenCodec, issuer: &str, scope: &str, ttl_mins: u64) -> Self {
        Self {
            codec,
            issuer: issuer.to_string(),
            scope: scope.to_string(),
            ttl_mins,
        }
    }

    /// Sign a fresh service claim set.
    pub fn mint(&self) -> TokenResult<String> {
        let claims = ServiceClaims::new(&self.issuer, &self.scope, self.ttl_mins);
        self.codec.sign(&claims)
    }

    /// Verify a token minted by this process.
    pub fn verify(&self, token: &str) -> TokenResult<ServiceClaims> {
        self.codec.verify(token)
    }
}
