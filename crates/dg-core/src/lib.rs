pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::credential_record::CredentialRecord;
pub use models::device_record::DeviceRecord;
pub use models::identity::Identity;
pub use models::validation::{ValidationReason, ValidationReceipt, ValidationRequest};

pub use error_location::ErrorLocation;

#[cfg(test)]
mod tests;
