use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Key material error: {message} {location}")]
    Key {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token encode failed: {source} {location}")]
    Encode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Token decode failed: {source} {location}")]
    Decode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, TokenError>;
