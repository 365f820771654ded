//! Ephemeral Ed25519 key material for token signing.

use crate::{Result as TokenResult, TokenError};

use std::panic::Location;

use ed25519_dalek::SigningKey;
use ed25519_dalek::pkcs8::{EncodePrivateKey, EncodePublicKey};
use error_location::ErrorLocation;
use jsonwebtoken::{DecodingKey, EncodingKey};
use pkcs8::LineEnding;

/// One signing keypair, generated fresh at process start and never
/// persisted. Every process instance signs with its own key; externalizing
/// key material is a deployment concern, not handled here.
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenKeys {
    /// Generate an ephemeral keypair from OS randomness.
    #[track_caller]
    pub fn ephemeral() -> TokenResult<Self> {
        let seed: [u8; 32] = rand::random();
        let signing_key = SigningKey::from_bytes(&seed);

        let private_pem = signing_key
            .to_pkcs8_pem(LineEnding::LF)
            .map_err(|e| TokenError::Key {
                message: format!("Failed to encode private key: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let public_pem = signing_key
            .verifying_key()
            .to_public_key_pem(LineEnding::LF)
            .map_err(|e| TokenError::Key {
                message: format!("Failed to encode public key: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let encoding =
            EncodingKey::from_ed_pem(private_pem.as_bytes()).map_err(|e| TokenError::Key {
                message: format!("Invalid Ed25519 private key PEM: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let decoding =
            DecodingKey::from_ed_pem(public_pem.as_bytes()).map_err(|e| TokenError::Key {
                message: format!("Invalid Ed25519 public key PEM: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self { encoding, decoding })
    }

    pub fn encoding(&self) -> &EncodingKey {
        &self.encoding
    }

    pub fn decoding(&self) -> &DecodingKey {
        &self.decoding
    }
}
