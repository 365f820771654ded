use crate::{Result as TokenResult, TokenError, TokenKeys};

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, Header, Validation, decode, encode};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Signs and verifies compact EdDSA tokens for one keypair.
///
/// Stateless beyond the key material; safe to share behind an Arc and call
/// from any number of concurrent requests.
pub struct TokenCodec {
    keys: TokenKeys,
    header: Header,
    validation: Validation,
}

impl TokenCodec {
    pub fn new(keys: TokenKeys) -> Self {
        let mut validation = Validation::new(Algorithm::EdDSA);
        validation.validate_exp = true;
        validation.leeway = 30; // 30 second clock skew tolerance

        Self {
            keys,
            header: Header::new(Algorithm::EdDSA),
            validation,
        }
    }

    /// Sign a claim set into a compact token string.
    #[track_caller]
    pub fn sign<C: Serialize>(&self, claims: &C) -> TokenResult<String> {
        encode(&self.header, claims, self.keys.encoding()).map_err(|e| TokenError::Encode {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Verify a compact token string and return its claims.
    #[track_caller]
    pub fn verify<C: DeserializeOwned>(&self, token: &str) -> TokenResult<C> {
        let token_data =
            decode::<C>(token, self.keys.decoding(), &self.validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => TokenError::Decode {
                        source: e,
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        Ok(token_data.claims)
    }
}
