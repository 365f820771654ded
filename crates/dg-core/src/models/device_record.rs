//! Device ledger entry - one row per fingerprint ever seen.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A device fingerprint seen for an identity.
///
/// Created unconfirmed the first time a fingerprint shows up on sign-in;
/// flipped to confirmed only by the device-confirmation flow. Never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// Surrogate id assigned by the store (0 until persisted).
    pub id: i64,
    /// Opaque client/browser identifier. At most one row per value.
    pub fingerprint: String,
    pub identity_id: i64,
    pub confirmed: bool,
    pub created_at: DateTime<Utc>,
}

impl DeviceRecord {
    /// New unconfirmed record for a fingerprint first seen now.
    pub fn unconfirmed(fingerprint: String, identity_id: i64) -> Self {
        Self {
            id: 0,
            fingerprint,
            identity_id,
            confirmed: false,
            created_at: Utc::now(),
        }
    }
}
