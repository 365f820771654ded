use crate::{AppState, health};
use crate::{confirm_device, get_service_token, get_user, get_user_by_email, list_users};
use crate::{release_credential, sign_in};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Sign-in flow
        .route("/signin", post(sign_in))
        .route("/signin-release", post(release_credential))
        // Trusted-peer endpoints
        .route("/internal/confirm-device", post(confirm_device))
        .route("/internal/service-token", get(get_service_token))
        // Directory passthrough
        .route("/users", get(list_users))
        .route("/users/{id}", get(get_user))
        .route("/users-email/{email}", get(get_user_by_email))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Add shared state
        .with_state(state)
        // CORS middleware (allow all origins)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
