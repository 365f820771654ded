//! Issuance and release results as plain data, free of any transport shape.

use uuid::Uuid;

/// Everything a sign-in attempt can resolve to.
///
/// Only `Issued` carries a bearer token. `PendingConfirmation` is the one
/// variant that pre-stages a credential server-side; everything the caller
/// gets is the pair of handles needed to come back for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueOutcome {
    /// Device trust satisfied (or bypassed); credential handed out now.
    Issued { bearer: String },
    /// Unseen device: confirmation requested, credential staged but withheld.
    PendingConfirmation {
        validation_id: String,
        correlation_id: Uuid,
    },
    /// Identity exists but has not completed registration.
    AccountNotActivated { validation_id: String },
    /// No fingerprint presented; nothing recorded, nothing requested.
    UnrecognizedDevice,
    /// The validation service could not be reached; fail closed.
    ServiceUnavailable,
}

/// Result of presenting a correlation id to the release flow.
///
/// Absent, already-released, and never-staged all collapse into `NotFound`
/// so the handle stays single-use without leaking which case it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseOutcome {
    Released { bearer: String },
    NotFound,
}
