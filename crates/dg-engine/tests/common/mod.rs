#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use dg_clients::ValidationClient;
use dg_config::IssuerConfig;
use dg_core::Identity;
use dg_engine::IssuanceEngine;
use dg_token::{ServiceTokenMinter, TokenCodec, TokenKeys};

use serde_json::json;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    dg_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Engine wired to the given validation endpoint with fresh ephemeral keys.
/// Also returns the session codec so tests can decode issued tokens.
pub fn create_engine(pool: SqlitePool, validation_url: &str) -> (IssuanceEngine, Arc<TokenCodec>) {
    let validation = Arc::new(
        ValidationClient::new(validation_url, Duration::from_millis(500))
            .expect("Failed to build validation client"),
    );

    let service_keys = TokenKeys::ephemeral().expect("Failed to generate service keys");
    let minter = Arc::new(ServiceTokenMinter::new(
        TokenCodec::new(service_keys),
        "security-service",
        "users:read users:write",
        60,
    ));

    let session_keys = TokenKeys::ephemeral().expect("Failed to generate session keys");
    let session_codec = Arc::new(TokenCodec::new(session_keys));

    let engine = IssuanceEngine::new(
        pool,
        validation,
        minter,
        Arc::clone(&session_codec),
        IssuerConfig::default(),
    );

    (engine, session_codec)
}

/// Mounts a validation endpoint that always answers with the given id.
pub async fn mount_validation(server: &MockServer, validation_id: &str) {
    Mock::given(method("POST"))
        .and(path("/validations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": validation_id })))
        .mount(server)
        .await;
}

pub fn active_identity(id: i64, email: &str) -> Identity {
    Identity {
        id,
        email: email.to_string(),
        username: email.to_string(),
        name: "Test User".to_string(),
        active: true,
        roles: vec!["ROLE_USER".to_string()],
        password_hash: None,
    }
}

pub fn inactive_identity(id: i64, email: &str) -> Identity {
    Identity {
        active: false,
        ..active_identity(id, email)
    }
}

pub fn admin_identity(id: i64, email: &str) -> Identity {
    Identity {
        roles: vec!["ROLE_USER".to_string(), "ROLE_ADMIN".to_string()],
        ..active_identity(id, email)
    }
}
