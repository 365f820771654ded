//! Directory-backed credential verification.

use crate::DirectoryClient;

use dg_core::Identity;
use dg_token::ServiceTokenMinter;

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::{debug, warn};
use thiserror::Error;

/// One failure kind on purpose: callers must never learn whether the email
/// or the password was wrong.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid email or password {location}")]
    InvalidCredentials { location: ErrorLocation },
}

impl AuthError {
    #[track_caller]
    fn invalid_credentials() -> Self {
        Self::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Verifies a username/password pair against the directory service.
///
/// Sign-in usernames are directory emails. The flow mints a service token,
/// performs the login-scoped lookup, then checks the password against the
/// stored bcrypt hash.
pub struct DirectoryAuthenticator {
    directory: Arc<DirectoryClient>,
    minter: Arc<ServiceTokenMinter>,
}

impl DirectoryAuthenticator {
    pub fn new(directory: Arc<DirectoryClient>, minter: Arc<ServiceTokenMinter>) -> Self {
        Self { directory, minter }
    }

    pub async fn verify(&self, username: &str, password: &str) -> Result<Identity, AuthError> {
        let service_token = self.minter.mint().map_err(|e| {
            warn!("Service token mint failed during sign-in: {}", e);
            AuthError::invalid_credentials()
        })?;

        let identity = self
            .directory
            .find_by_email_for_login(&service_token, username)
            .await;

        if identity.is_placeholder() {
            debug!("Sign-in rejected: no directory record for {}", username);
            return Err(AuthError::invalid_credentials());
        }

        let Some(ref hash) = identity.password_hash else {
            debug!("Sign-in rejected: no stored hash for {}", username);
            return Err(AuthError::invalid_credentials());
        };

        match bcrypt::verify(password, hash) {
            Ok(true) => Ok(identity),
            Ok(false) => Err(AuthError::invalid_credentials()),
            Err(e) => {
                warn!("Stored hash for {} is unverifiable: {}", username, e);
                Err(AuthError::invalid_credentials())
            }
        }
    }
}
