pub mod release_request;
pub mod sign_in;
pub mod sign_in_denied;
pub mod sign_in_request;
pub mod sign_in_response;
