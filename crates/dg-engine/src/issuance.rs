//! The sign-in decision: who gets a session credential, and when.

use crate::{IdentityLocks, IssueOutcome, Result as EngineResult};

use std::sync::Arc;

use dg_clients::ValidationClient;
use dg_config::IssuerConfig;
use dg_core::{
    CredentialRecord, DeviceRecord, Identity, ValidationReason, ValidationRequest,
};
use dg_db::{CredentialRepository, DeviceRepository};
use dg_token::{ServiceTokenMinter, SessionClaims, TokenCodec};

use log::{debug, info, warn};
use sqlx::SqlitePool;
use uuid::Uuid;

/// Decides, for one authenticated identity and an optional device
/// fingerprint, whether to hand out a session credential now, stage one
/// behind an out-of-band confirmation, or refuse.
///
/// Stateless beyond the lock map; shared behind an Arc across requests.
pub struct IssuanceEngine {
    devices: DeviceRepository,
    credentials: CredentialRepository,
    validation: Arc<ValidationClient>,
    minter: Arc<ServiceTokenMinter>,
    session_codec: Arc<TokenCodec>,
    issuer: IssuerConfig,
    locks: IdentityLocks,
}

impl IssuanceEngine {
    pub fn new(
        pool: SqlitePool,
        validation: Arc<ValidationClient>,
        minter: Arc<ServiceTokenMinter>,
        session_codec: Arc<TokenCodec>,
        issuer: IssuerConfig,
    ) -> Self {
        Self {
            devices: DeviceRepository::new(pool.clone()),
            credentials: CredentialRepository::new(pool),
            validation,
            minter,
            session_codec,
            issuer,
            locks: IdentityLocks::new(),
        }
    }

    /// Run the issuance decision for an already-authenticated identity.
    ///
    /// Branches, in order:
    /// 1. privileged role: issue immediately, no device trust check
    /// 2. inactive identity: request registration confirmation, no credential
    /// 3. no fingerprint: refuse outright, no side effects
    /// 4. unseen fingerprint: record the device, request confirmation, and
    ///    pre-stage a withheld credential keyed by a fresh correlation id
    /// 5. known but unconfirmed fingerprint: re-request confirmation only
    /// 6. known confirmed fingerprint: turn over the credential and issue
    pub async fn issue(
        &self,
        identity: &Identity,
        fingerprint: Option<&str>,
    ) -> EngineResult<IssueOutcome> {
        if identity.has_role(&self.issuer.privileged_role) {
            info!(
                "Privileged sign-in for identity {}, bypassing device trust",
                identity.id
            );
            let bearer = self.turn_over_credential(identity).await?;
            return Ok(IssueOutcome::Issued { bearer });
        }

        if !identity.active {
            debug!("Identity {} is not activated", identity.id);
            let receipt = self
                .request_validation(identity, ValidationReason::Registration, None)
                .await;

            return Ok(match receipt {
                Some(validation_id) => IssueOutcome::AccountNotActivated { validation_id },
                None => IssueOutcome::ServiceUnavailable,
            });
        }

        let Some(fingerprint) = fingerprint.filter(|f| !f.is_empty()) else {
            debug!("Sign-in for identity {} carried no fingerprint", identity.id);
            return Ok(IssueOutcome::UnrecognizedDevice);
        };

        match self.devices.find_by_fingerprint(fingerprint).await? {
            None => self.stage_for_unseen_device(identity, fingerprint).await,
            Some(device) if !device.confirmed => {
                debug!(
                    "Device {} for identity {} still awaits confirmation",
                    device.id, identity.id
                );
                let receipt = self
                    .request_validation(identity, ValidationReason::DeviceId, Some(device.id))
                    .await;

                Ok(match receipt {
                    Some(validation_id) => IssueOutcome::PendingConfirmation {
                        validation_id,
                        correlation_id: Uuid::new_v4(),
                    },
                    None => IssueOutcome::ServiceUnavailable,
                })
            }
            Some(device) => {
                debug!(
                    "Device {} confirmed for identity {}, issuing",
                    device.id, identity.id
                );
                let bearer = self.turn_over_credential(identity).await?;
                Ok(IssueOutcome::Issued { bearer })
            }
        }
    }

    /// Branch 4: first sighting of a fingerprint. The device row and the
    /// withheld credential are both written before the caller hears back,
    /// so the later release presents nothing that was not already decided.
    async fn stage_for_unseen_device(
        &self,
        identity: &Identity,
        fingerprint: &str,
    ) -> EngineResult<IssueOutcome> {
        let mut device = DeviceRecord::unconfirmed(fingerprint.to_string(), identity.id);
        device.id = self.devices.create(&device).await?;
        info!(
            "Recorded new device {} for identity {}",
            device.id, identity.id
        );

        let Some(validation_id) = self
            .request_validation(identity, ValidationReason::DeviceId, Some(device.id))
            .await
        else {
            return Ok(IssueOutcome::ServiceUnavailable);
        };

        let correlation_id = Uuid::new_v4();
        let token = self.sign_session(identity)?;

        let _guard = self.locks.acquire(identity.id).await;
        self.credentials.delete_all_by_identity(identity.id).await?;
        self.credentials
            .create(&CredentialRecord::pending(token, identity.id, correlation_id))
            .await?;

        Ok(IssueOutcome::PendingConfirmation {
            validation_id,
            correlation_id,
        })
    }

    /// Replace whatever credentials the identity holds with one fresh live
    /// record. The per-identity lock spans the delete and the insert.
    async fn turn_over_credential(&self, identity: &Identity) -> EngineResult<String> {
        let token = self.sign_session(identity)?;

        let _guard = self.locks.acquire(identity.id).await;
        let removed = self.credentials.delete_all_by_identity(identity.id).await?;
        if removed > 0 {
            debug!(
                "Invalidated {} prior credential(s) for identity {}",
                removed, identity.id
            );
        }

        self.credentials
            .create(&CredentialRecord::issued(token.clone(), identity.id))
            .await?;

        Ok(token)
    }

    fn sign_session(&self, identity: &Identity) -> EngineResult<String> {
        let claims =
            SessionClaims::for_identity(identity, &self.issuer.name, self.issuer.session_ttl_mins);
        Ok(self.session_codec.sign(&claims)?)
    }

    /// Ask the validation service for an out-of-band confirmation, carrying
    /// a freshly minted service credential. `None` means the service could
    /// not be reached and the caller must fail closed.
    async fn request_validation(
        &self,
        identity: &Identity,
        reason: ValidationReason,
        target_record_id: Option<i64>,
    ) -> Option<String> {
        let service_token = match self.minter.mint() {
            Ok(token) => token,
            Err(e) => {
                warn!("Could not mint service credential for validation call: {e}");
                return None;
            }
        };

        let request = ValidationRequest {
            identity_id: identity.id,
            username: identity.username.clone(),
            target_record_id,
            email: identity.email.clone(),
            reason,
        };

        self.validation
            .send_validation(&service_token, &request)
            .await
            .id
    }
}
