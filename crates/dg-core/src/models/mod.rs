pub mod credential_record;
pub mod device_record;
pub mod identity;
pub mod validation;
