use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    /// Directory email used as the login name (required)
    pub username: String,

    /// Plaintext password, checked against the directory hash (required)
    pub password: String,

    /// Opaque client-generated device identifier
    #[serde(default)]
    pub device_fingerprint: Option<String>,
}
