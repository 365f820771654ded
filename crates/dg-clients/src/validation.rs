//! HTTP client for the external validation/notification service.

use crate::{ClientError, Result as ClientResult};

use dg_core::{ValidationReceipt, ValidationRequest};

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use log::warn;
use reqwest::Client as ReqwestClient;

pub struct ValidationClient {
    base_url: String,
    client: ReqwestClient,
}

impl ValidationClient {
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

    /// Request an out-of-band confirmation.
    ///
    /// Any transport or decode failure collapses into a receipt without an
    /// id, so callers see exactly one outage signal and can fail closed.
    pub async fn send_validation(
        &self,
        service_token: &str,
        request: &ValidationRequest,
    ) -> ValidationReceipt {
        match self.post_validation(service_token, request).await {
            Ok(receipt) => receipt,
            Err(e) => {
                warn!(
                    "Validation request for identity {} ({}) failed: {}",
                    request.identity_id, request.reason, e
                );
                ValidationReceipt::unavailable()
            }
        }
    }

    async fn post_validation(
        &self,
        service_token: &str,
        request: &ValidationRequest,
    ) -> ClientResult<ValidationReceipt> {
        let url = format!("{}/validations", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", service_token))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                path: "/validations".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(response.json().await?)
    }
}
