//! HTTP client for the external users/directory service.
//!
//! Every lookup degrades instead of propagating transport errors: single
//! lookups fall back to a placeholder identity (inactive, no roles) and
//! `list_all` falls back to an empty list, so a directory outage can never
//! crash a caller or let an issuance branch proceed open.

use crate::{ClientError, Result as ClientResult};

use dg_core::Identity;

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use log::warn;
use reqwest::Client as ReqwestClient;

pub struct DirectoryClient {
    base_url: String,
    client: ReqwestClient,
}

impl DirectoryClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Directory service URL (e.g., "http://127.0.0.1:8601")
    /// * `timeout` - Outbound call deadline; hitting it triggers degradation
    #[track_caller]
    pub fn new(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Build {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Look up an identity by id, degrading to a placeholder on failure.
    pub async fn find_by_id(&self, id: i64) -> Identity {
        match self.fetch_identity(&format!("/users/{}", id), None).await {
            Ok(identity) => identity,
            Err(e) => {
                warn!("Directory lookup for id {} failed: {}", id, e);
                Identity::placeholder("default@email.com")
            }
        }
    }

    /// Look up an identity by email, degrading to a placeholder on failure.
    pub async fn find_by_email(&self, email: &str) -> Identity {
        match self
            .fetch_identity(&format!("/users-email/{}", email), None)
            .await
        {
            Ok(identity) => identity,
            Err(e) => {
                warn!("Directory lookup for {} failed: {}", email, e);
                Identity::placeholder(email)
            }
        }
    }

    /// Login-scoped lookup carrying a service bearer token. The answer is
    /// the only directory response that may include a password hash.
    pub async fn find_by_email_for_login(&self, service_token: &str, email: &str) -> Identity {
        match self
            .fetch_identity(
                &format!("/_internal/users-login/{}", email),
                Some(service_token),
            )
            .await
        {
            Ok(identity) => identity,
            Err(e) => {
                warn!("Directory login lookup for {} failed: {}", email, e);
                Identity::placeholder(email)
            }
        }
    }

    /// List every identity, degrading to an empty list on failure.
    pub async fn list_all(&self) -> Vec<Identity> {
        let url = format!("{}/users", self.base_url);

        let result: ClientResult<Vec<Identity>> = async {
            let response = self.client.get(&url).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(self.status_error(status.as_u16(), "/users"));
            }
            Ok(response.json().await?)
        }
        .await;

        match result {
            Ok(identities) => identities,
            Err(e) => {
                warn!("Directory listing failed: {}", e);
                Vec::new()
            }
        }
    }

    async fn fetch_identity(&self, path: &str, bearer: Option<&str>) -> ClientResult<Identity> {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.get(&url);

        if let Some(token) = bearer {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(self.status_error(status.as_u16(), path));
        }

        Ok(response.json().await?)
    }

    #[track_caller]
    fn status_error(&self, status: u16, path: &str) -> ClientError {
        ClientError::Status {
            status,
            path: path.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
