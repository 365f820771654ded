//! Issued-credential ledger entry.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The persisted record of an issued session credential, distinct from the
/// signed token string it stores.
///
/// While `pending` is true the token value must not leave the service except
/// through the release flow presenting the matching correlation id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    /// Surrogate id assigned by the store (0 until persisted).
    pub id: i64,
    /// Signed compact token value.
    pub token: String,
    pub identity_id: i64,
    pub pending: bool,
    /// Single-use release handle, set only on pending issuance.
    pub correlation_id: Option<Uuid>,
    /// Legacy status flag, consumed only by the periodic sweep.
    pub revoked: bool,
    /// Legacy status flag, consumed only by the periodic sweep.
    pub expired: bool,
}

impl CredentialRecord {
    /// A live credential, usable immediately by its holder.
    pub fn issued(token: String, identity_id: i64) -> Self {
        Self {
            id: 0,
            token,
            identity_id,
            pending: false,
            correlation_id: None,
            revoked: false,
            expired: false,
        }
    }

    /// A pre-staged credential withheld until released by correlation id.
    pub fn pending(token: String, identity_id: i64, correlation_id: Uuid) -> Self {
        Self {
            id: 0,
            token,
            identity_id,
            pending: true,
            correlation_id: Some(correlation_id),
            revoked: false,
            expired: false,
        }
    }

    /// True for the one record per identity a holder should trust.
    pub fn is_live(&self) -> bool {
        !self.pending && !self.revoked && !self.expired
    }
}
