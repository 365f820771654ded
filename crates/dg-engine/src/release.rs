//! Single-use release of a pre-staged credential by correlation id.

use crate::{ReleaseOutcome, Result as EngineResult};

use dg_db::CredentialRepository;

use log::{debug, info};
use sqlx::SqlitePool;
use uuid::Uuid;

/// Hands a withheld credential to whoever presents its correlation id.
///
/// The handle is single-use: the first successful release flips the record
/// to non-pending, after which the same id resolves to `NotFound`. Device
/// confirmation is a separate flow and is deliberately not consulted here.
pub struct PendingRelease {
    credentials: CredentialRepository,
}

impl PendingRelease {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            credentials: CredentialRepository::new(pool),
        }
    }

    pub async fn release(&self, correlation_id: Uuid) -> EngineResult<ReleaseOutcome> {
        let Some(record) = self.credentials.find_by_correlation_id(correlation_id).await? else {
            debug!("No credential staged under correlation id {correlation_id}");
            return Ok(ReleaseOutcome::NotFound);
        };

        // The conditional update is the decisive gate: if another release
        // consumed the record between the lookup and here, zero rows match
        // and this caller gets NotFound instead of the token.
        let affected = self.credentials.mark_released(record.id).await?;
        if affected == 0 {
            debug!("Correlation id {correlation_id} was already consumed");
            return Ok(ReleaseOutcome::NotFound);
        }

        info!(
            "Released staged credential {} for identity {}",
            record.id, record.identity_id
        );

        Ok(ReleaseOutcome::Released {
            bearer: record.token,
        })
    }
}
