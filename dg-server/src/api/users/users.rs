//! Directory passthrough handlers.
//!
//! Read-only views over the external users directory. The directory client
//! degrades to placeholders rather than erroring, so a placeholder here
//! means "not found or directory down" and maps to 404.

use crate::{ApiError, ApiResult, AppState, UserListResponse, UserResponse};

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
};
use error_location::ErrorLocation;

/// GET /users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<UserListResponse>> {
    let users = state.directory.list_all().await;

    Ok(Json(UserListResponse { users }))
}

/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<UserResponse>> {
    let user = state.directory.find_by_id(id).await;

    if user.is_placeholder() {
        return Err(ApiError::NotFound {
            message: format!("User {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(Json(UserResponse { user }))
}

/// GET /users-email/{email}
pub async fn get_user_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user = state.directory.find_by_email(&email).await;

    if user.is_placeholder() {
        return Err(ApiError::NotFound {
            message: format!("User {} not found", email),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(Json(UserResponse { user }))
}
