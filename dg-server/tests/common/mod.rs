#![allow(dead_code)]

//! Test infrastructure for dg-server API tests

use dg_server::AppState;

use std::sync::Arc;
use std::time::Duration;

use dg_clients::{DirectoryAuthenticator, DirectoryClient, ValidationClient};
use dg_config::IssuerConfig;
use dg_engine::{DeviceConfirmation, IssuanceEngine, PendingRelease};
use dg_token::{ServiceTokenMinter, TokenCodec, TokenKeys};

use serde_json::json;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    dg_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Full server state plus the mock upstreams it talks to.
pub struct TestHarness {
    pub state: AppState,
    pub directory: MockServer,
    pub validation: MockServer,
    pub session_codec: Arc<TokenCodec>,
}

/// Create AppState wired to fresh mock directory and validation servers.
pub async fn create_test_harness() -> TestHarness {
    let directory_server = MockServer::start().await;
    let validation_server = MockServer::start().await;

    let pool = create_test_pool().await;

    let directory = Arc::new(
        DirectoryClient::new(&directory_server.uri(), Duration::from_millis(500))
            .expect("Failed to build directory client"),
    );
    let validation = Arc::new(
        ValidationClient::new(&validation_server.uri(), Duration::from_millis(500))
            .expect("Failed to build validation client"),
    );

    let minter = Arc::new(ServiceTokenMinter::new(
        TokenCodec::new(TokenKeys::ephemeral().expect("Failed to generate service keys")),
        "security-service",
        "users:read users:write",
        60,
    ));
    let session_codec = Arc::new(TokenCodec::new(
        TokenKeys::ephemeral().expect("Failed to generate session keys"),
    ));

    let engine = Arc::new(IssuanceEngine::new(
        pool.clone(),
        validation,
        Arc::clone(&minter),
        Arc::clone(&session_codec),
        IssuerConfig::default(),
    ));

    let state = AppState {
        pool: pool.clone(),
        engine,
        release: Arc::new(PendingRelease::new(pool.clone())),
        confirmation: Arc::new(DeviceConfirmation::new(pool)),
        authenticator: Arc::new(DirectoryAuthenticator::new(
            Arc::clone(&directory),
            Arc::clone(&minter),
        )),
        directory,
        minter,
    };

    TestHarness {
        state,
        directory: directory_server,
        validation: validation_server,
        session_codec,
    }
}

/// Serve one identity on the login-scoped directory lookup, with the given
/// plaintext password stored as a bcrypt hash.
pub async fn mount_login_identity(
    server: &MockServer,
    id: i64,
    email: &str,
    password: &str,
    active: bool,
    roles: &[&str],
) {
    let hash = bcrypt::hash(password, 4).expect("Failed to hash password");

    Mock::given(method("GET"))
        .and(path(format!("/_internal/users-login/{email}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": id,
            "email": email,
            "username": email,
            "name": "Test User",
            "active": active,
            "roles": roles,
            "password_hash": hash,
        })))
        .mount(server)
        .await;
}

/// Serve a fixed validation id for every confirmation request.
pub async fn mount_validation(server: &MockServer, validation_id: &str) {
    Mock::given(method("POST"))
        .and(path("/validations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": validation_id })))
        .mount(server)
        .await;
}
