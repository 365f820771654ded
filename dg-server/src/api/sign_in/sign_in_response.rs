use serde::Serialize;

/// Successful sign-in: the session credential itself.
#[derive(Debug, Serialize)]
pub struct SignInResponse {
    pub bearer: String,
}
