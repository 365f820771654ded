pub mod cleanup;
pub mod device_confirmation;
pub mod error;
pub mod identity_locks;
pub mod issuance;
pub mod outcome;
pub mod release;

pub use cleanup::purge_defunct_credentials;
pub use device_confirmation::DeviceConfirmation;
pub use error::{EngineError, Result};
pub use identity_locks::IdentityLocks;
pub use issuance::IssuanceEngine;
pub use outcome::{IssueOutcome, ReleaseOutcome};
pub use release::PendingRelease;
