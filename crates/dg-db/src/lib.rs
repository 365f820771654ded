pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::credential_repository::CredentialRepository;
pub use repositories::device_repository::DeviceRepository;

/// Embedded migrations for the device and credential ledgers.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
