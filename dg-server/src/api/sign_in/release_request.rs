use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct ReleaseRequest {
    /// Single-use handle returned by a pending sign-in (required)
    pub correlation_id: Uuid,
}
