//! Identity record owned by the external directory service.

use serde::{Deserialize, Serialize};

/// A directory identity as returned by the users service.
///
/// Read-only to this service: the directory owns the record, we only
/// consult it to decide whether and how to issue session credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub name: String,
    pub active: bool,
    #[serde(default)]
    pub roles: Vec<String>,
    /// Bcrypt hash, only present on the login-scoped directory lookup.
    /// Never serialized back out of this service.
    #[serde(default, skip_serializing)]
    pub password_hash: Option<String>,
}

impl Identity {
    /// Degraded stand-in returned when the directory is unreachable:
    /// inactive, no roles, so every issuance branch fails closed.
    pub fn placeholder(email: &str) -> Self {
        Self {
            id: 0,
            email: email.to_string(),
            username: String::new(),
            name: "unknown".to_string(),
            active: false,
            roles: Vec::new(),
            password_hash: None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.id == 0 && self.name == "unknown"
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}
