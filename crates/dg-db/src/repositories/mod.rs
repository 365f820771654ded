pub mod credential_repository;
pub mod device_repository;
