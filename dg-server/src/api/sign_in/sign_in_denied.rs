use serde::Serialize;
use uuid::Uuid;

/// Refusal body for sign-ins that did not yield a credential.
///
/// `validation_id` is present whenever an out-of-band confirmation was
/// requested; `correlation_id` only when a credential was staged for a
/// later release.
#[derive(Debug, Serialize)]
pub struct SignInDenied {
    pub error: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<Uuid>,
}

impl SignInDenied {
    pub fn new(error: &str) -> Self {
        Self {
            error: error.to_string(),
            validation_id: None,
            correlation_id: None,
        }
    }
}
