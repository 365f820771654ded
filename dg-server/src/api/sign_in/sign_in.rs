//! Sign-in and pending-release REST handlers.

use crate::{
    ApiError, ApiResult, AppState, ReleaseRequest, SignInDenied, SignInRequest, SignInResponse,
};

use std::panic::Location;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dg_engine::{IssueOutcome, ReleaseOutcome};
use error_location::ErrorLocation;

/// POST /signin
///
/// Authenticate against the directory, then run the device-trust issuance
/// decision. Only the `Issued` outcome carries a credential; every refusal
/// spells out what the client should do next.
pub async fn sign_in(
    State(state): State<AppState>,
    Json(request): Json<SignInRequest>,
) -> ApiResult<Response> {
    let identity = state
        .authenticator
        .verify(&request.username, &request.password)
        .await
        .map_err(|_| ApiError::AuthFailed {
            message: "Invalid credentials".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let outcome = state
        .engine
        .issue(&identity, request.device_fingerprint.as_deref())
        .await?;

    Ok(match outcome {
        IssueOutcome::Issued { bearer } => {
            (StatusCode::OK, Json(SignInResponse { bearer })).into_response()
        }
        IssueOutcome::PendingConfirmation {
            validation_id,
            correlation_id,
        } => (
            StatusCode::FORBIDDEN,
            Json(SignInDenied {
                validation_id: Some(validation_id),
                correlation_id: Some(correlation_id),
                ..SignInDenied::new("Device confirmation required")
            }),
        )
            .into_response(),
        IssueOutcome::AccountNotActivated { validation_id } => (
            StatusCode::FORBIDDEN,
            Json(SignInDenied {
                validation_id: Some(validation_id),
                ..SignInDenied::new("Account not activated")
            }),
        )
            .into_response(),
        IssueOutcome::UnrecognizedDevice => (
            StatusCode::FORBIDDEN,
            Json(SignInDenied::new("Unrecognized device")),
        )
            .into_response(),
        IssueOutcome::ServiceUnavailable => {
            return Err(ApiError::ServiceUnavailable {
                message: "Validation service unreachable".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
    })
}

/// POST /signin-release
///
/// Trade a correlation id for the credential staged under it. The handle is
/// single use; consumed or unknown ids both come back 404.
pub async fn release_credential(
    State(state): State<AppState>,
    Json(request): Json<ReleaseRequest>,
) -> ApiResult<Json<SignInResponse>> {
    match state.release.release(request.correlation_id).await? {
        ReleaseOutcome::Released { bearer } => Ok(Json(SignInResponse { bearer })),
        ReleaseOutcome::NotFound => Err(ApiError::NotFound {
            message: "No pending credential for that correlation id".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
