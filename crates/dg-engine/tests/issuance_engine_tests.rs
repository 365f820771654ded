//! End-to-end issuance decisions against an in-memory store and a mock
//! validation service.

mod common;

use crate::common::{
    active_identity, admin_identity, create_engine, create_test_pool, inactive_identity,
    mount_validation,
};

use dg_db::{CredentialRepository, DeviceRepository};
use dg_engine::IssueOutcome;
use dg_token::SessionClaims;

use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_inactive_identity_gets_registration_validation_and_no_credential() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/validations"))
        .and(body_string_contains("registration"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": "31" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let pool = create_test_pool().await;
    let (engine, _) = create_engine(pool.clone(), &server.uri());

    let outcome = engine
        .issue(&inactive_identity(5, "u@t.com"), Some("dev-1"))
        .await
        .unwrap();

    assert_eq!(
        outcome,
        IssueOutcome::AccountNotActivated {
            validation_id: "31".to_string()
        }
    );

    let credentials = CredentialRepository::new(pool);
    assert!(credentials.find_all_by_identity(5).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_fingerprint_is_refused_with_no_side_effects() {
    let server = MockServer::start().await;
    mount_validation(&server, "99").await;

    let pool = create_test_pool().await;
    let (engine, _) = create_engine(pool.clone(), &server.uri());

    let outcome = engine
        .issue(&active_identity(5, "u@t.com"), None)
        .await
        .unwrap();
    assert_eq!(outcome, IssueOutcome::UnrecognizedDevice);

    let outcome = engine
        .issue(&active_identity(5, "u@t.com"), Some(""))
        .await
        .unwrap();
    assert_eq!(outcome, IssueOutcome::UnrecognizedDevice);

    assert!(server.received_requests().await.unwrap().is_empty());
    let credentials = CredentialRepository::new(pool);
    assert!(credentials.find_all_by_identity(5).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unseen_fingerprint_records_device_and_stages_withheld_credential() {
    let server = MockServer::start().await;
    mount_validation(&server, "10").await;

    let pool = create_test_pool().await;
    let (engine, _) = create_engine(pool.clone(), &server.uri());

    let outcome = engine
        .issue(&active_identity(5, "u@t.com"), Some("dev-1"))
        .await
        .unwrap();

    let IssueOutcome::PendingConfirmation {
        validation_id,
        correlation_id,
    } = outcome
    else {
        panic!("expected PendingConfirmation, got {outcome:?}");
    };
    assert_eq!(validation_id, "10");

    let device = DeviceRepository::new(pool.clone())
        .find_by_fingerprint("dev-1")
        .await
        .unwrap()
        .expect("device row should exist");
    assert_eq!(device.identity_id, 5);
    assert!(!device.confirmed);

    let staged = CredentialRepository::new(pool)
        .find_all_by_identity(5)
        .await
        .unwrap();
    assert_eq!(staged.len(), 1);
    assert!(staged[0].pending);
    assert_eq!(staged[0].correlation_id, Some(correlation_id));
}

#[tokio::test]
async fn test_known_unconfirmed_device_revalidates_without_staging() {
    let server = MockServer::start().await;
    mount_validation(&server, "10").await;

    let pool = create_test_pool().await;
    let (engine, _) = create_engine(pool.clone(), &server.uri());
    let identity = active_identity(5, "u@t.com");

    let first = engine.issue(&identity, Some("dev-1")).await.unwrap();
    let second = engine.issue(&identity, Some("dev-1")).await.unwrap();

    let IssueOutcome::PendingConfirmation {
        correlation_id: first_handle,
        ..
    } = first
    else {
        panic!("expected PendingConfirmation, got {first:?}");
    };
    let IssueOutcome::PendingConfirmation {
        correlation_id: second_handle,
        ..
    } = second
    else {
        panic!("expected PendingConfirmation, got {second:?}");
    };

    // A fresh handle each attempt, but only the first staged a credential.
    assert_ne!(first_handle, second_handle);

    let staged = CredentialRepository::new(pool.clone())
        .find_all_by_identity(5)
        .await
        .unwrap();
    assert_eq!(staged.len(), 1);
    assert_eq!(staged[0].correlation_id, Some(first_handle));

    // And no second device row for the same fingerprint.
    let device = DeviceRepository::new(pool)
        .find_by_fingerprint("dev-1")
        .await
        .unwrap();
    assert!(device.is_some());
}

#[tokio::test]
async fn test_confirmed_device_turns_over_to_one_live_credential() {
    let server = MockServer::start().await;
    mount_validation(&server, "10").await;

    let pool = create_test_pool().await;
    let (engine, codec) = create_engine(pool.clone(), &server.uri());
    let identity = active_identity(5, "u@t.com");

    engine.issue(&identity, Some("dev-1")).await.unwrap();

    let device = DeviceRepository::new(pool.clone())
        .find_by_fingerprint("dev-1")
        .await
        .unwrap()
        .unwrap();
    dg_engine::DeviceConfirmation::new(pool.clone())
        .confirm(device.id)
        .await
        .unwrap();

    let first = engine.issue(&identity, Some("dev-1")).await.unwrap();
    let IssueOutcome::Issued { bearer: first } = first else {
        panic!("expected Issued, got {first:?}");
    };

    let second = engine.issue(&identity, Some("dev-1")).await.unwrap();
    let IssueOutcome::Issued { bearer: second } = second else {
        panic!("expected Issued, got {second:?}");
    };

    // Each issuance replaces everything before it.
    let rows = CredentialRepository::new(pool)
        .find_all_by_identity(5)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert!(!rows[0].pending);
    assert_eq!(rows[0].token, second);

    let claims: SessionClaims = codec.verify(&second).unwrap();
    assert_eq!(claims.sub, "u@t.com");
    assert_eq!(claims.id, 5);
    assert_eq!(claims.iss, "security-service");

    // The superseded token still verifies cryptographically; only the
    // ledger says which one is current.
    assert!(codec.verify::<SessionClaims>(&first).is_ok());
}

#[tokio::test]
async fn test_privileged_role_bypasses_device_trust() {
    let server = MockServer::start().await;
    mount_validation(&server, "10").await;

    let pool = create_test_pool().await;
    let (engine, _) = create_engine(pool.clone(), &server.uri());

    let outcome = engine
        .issue(&admin_identity(9, "root@t.com"), None)
        .await
        .unwrap();

    assert!(matches!(outcome, IssueOutcome::Issued { .. }));
    assert!(server.received_requests().await.unwrap().is_empty());

    let rows = CredentialRepository::new(pool)
        .find_all_by_identity(9)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert!(!rows[0].pending);
}

#[tokio::test]
async fn test_validation_outage_fails_closed_for_unseen_device() {
    let pool = create_test_pool().await;
    let (engine, _) = create_engine(pool.clone(), "http://127.0.0.1:1");

    let outcome = engine
        .issue(&active_identity(5, "u@t.com"), Some("dev-1"))
        .await
        .unwrap();
    assert_eq!(outcome, IssueOutcome::ServiceUnavailable);

    // The device sighting is recorded, but nothing is staged for release.
    let device = DeviceRepository::new(pool.clone())
        .find_by_fingerprint("dev-1")
        .await
        .unwrap();
    assert!(device.is_some());

    let staged = CredentialRepository::new(pool)
        .find_all_by_identity(5)
        .await
        .unwrap();
    assert!(staged.is_empty());
}

#[tokio::test]
async fn test_validation_outage_fails_closed_for_inactive_identity() {
    let pool = create_test_pool().await;
    let (engine, _) = create_engine(pool, "http://127.0.0.1:1");

    let outcome = engine
        .issue(&inactive_identity(5, "u@t.com"), Some("dev-1"))
        .await
        .unwrap();
    assert_eq!(outcome, IssueOutcome::ServiceUnavailable);
}

#[tokio::test]
async fn test_device_validation_request_carries_device_record_id() {
    let server = MockServer::start().await;
    mount_validation(&server, "10").await;

    let pool = create_test_pool().await;
    let (engine, _) = create_engine(pool.clone(), &server.uri());

    engine
        .issue(&active_identity(5, "u@t.com"), Some("dev-1"))
        .await
        .unwrap();

    let device_id = DeviceRepository::new(pool)
        .find_by_fingerprint("dev-1")
        .await
        .unwrap()
        .unwrap()
        .id;

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);

    let body: serde_json::Value = requests[0].body_json().unwrap();
    assert_eq!(body["reason"], "deviceId");
    assert_eq!(body["target_record_id"], serde_json::json!(device_id));
    assert_eq!(body["email"], "u@t.com");
    assert_eq!(body["identity_id"], 5);
}
