use dg_core::Identity;
use serde::Serialize;

/// Directory listing response
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub users: Vec<Identity>,
}
