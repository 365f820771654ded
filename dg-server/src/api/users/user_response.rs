use dg_core::Identity;
use serde::Serialize;

/// Single directory identity response
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: Identity,
}
