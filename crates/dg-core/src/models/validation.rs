//! Request/receipt DTOs for the out-of-band validation service.

use crate::{CoreError, ErrorLocation, Result as CoreResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Why a confirmation is being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationReason {
    /// The account itself has not completed registration.
    Registration,
    /// A device fingerprint needs out-of-band confirmation.
    DeviceId,
}

impl ValidationReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Registration => "registration",
            Self::DeviceId => "deviceId",
        }
    }
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ValidationReason {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl FromStr for ValidationReason {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "registration" => Ok(Self::Registration),
            "deviceId" => Ok(Self::DeviceId),
            other => Err(CoreError::InvalidValidationReason {
                value: other.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

/// Outbound confirmation request.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationRequest {
    pub identity_id: i64,
    pub username: String,
    /// Device record id when the reason is a device confirmation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_record_id: Option<i64>,
    pub email: String,
    pub reason: ValidationReason,
}

/// What the validation service answered. A missing id is the one and only
/// signal that the service is unreachable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidationReceipt {
    #[serde(default)]
    pub id: Option<String>,
}

impl ValidationReceipt {
    /// Degraded receipt used when the service could not be reached.
    pub fn unavailable() -> Self {
        Self { id: None }
    }
}
