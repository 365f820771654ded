//! Device confirmation REST handler.

use crate::{ApiResult, AppState, ConfirmDeviceRequest};

use axum::{Json, extract::State, http::StatusCode};

/// POST /internal/confirm-device
///
/// Called by the validation service once the holder approved the device
/// out of band. Idempotent; unknown ids are quietly accepted.
pub async fn confirm_device(
    State(state): State<AppState>,
    Json(request): Json<ConfirmDeviceRequest>,
) -> ApiResult<StatusCode> {
    state.confirmation.confirm(request.device_record_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
