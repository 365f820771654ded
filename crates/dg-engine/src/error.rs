use std::panic::Location;

use dg_db::DbError;
use dg_token::TokenError;
use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Store error: {source} {location}")]
    Db {
        source: DbError,
        location: ErrorLocation,
    },

    #[error("Token error: {source} {location}")]
    Token {
        source: TokenError,
        location: ErrorLocation,
    },
}

impl From<DbError> for EngineError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Db {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<TokenError> for EngineError {
    #[track_caller]
    fn from(source: TokenError) -> Self {
        Self::Token {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
