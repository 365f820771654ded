//! Service-to-service credential endpoint.

use crate::{ApiResult, AppState};

use axum::extract::State;

/// GET /internal/service-token
///
/// Mint a fresh short-lived service credential for a trusted peer. Returned
/// as the bare compact token string.
pub async fn get_service_token(State(state): State<AppState>) -> ApiResult<String> {
    Ok(state.minter.mint()?)
}
