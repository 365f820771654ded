use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ConfirmDeviceRequest {
    /// Device ledger id the validation service echoed back (required)
    pub device_record_id: i64,
}
