pub mod devices;
pub mod error;
pub mod service_token;
pub mod sign_in;
pub mod users;
