use crate::{CredentialRecord, DeviceRecord, Identity, ValidationReason, ValidationReceipt};

use std::str::FromStr;

use uuid::Uuid;

#[test]
fn test_placeholder_identity_is_inactive_and_roleless() {
    let identity = Identity::placeholder("ghost@example.com");

    assert_eq!(identity.id, 0);
    assert_eq!(identity.email, "ghost@example.com");
    assert!(!identity.active);
    assert!(identity.roles.is_empty());
    assert!(identity.is_placeholder());
}

#[test]
fn test_has_role() {
    let mut identity = Identity::placeholder("a@b.c");
    identity.roles = vec!["ROLE_USER".to_string(), "ROLE_ADMIN".to_string()];

    assert!(identity.has_role("ROLE_ADMIN"));
    assert!(!identity.has_role("ROLE_AUDITOR"));
}

#[test]
fn test_device_record_unconfirmed() {
    let device = DeviceRecord::unconfirmed("fp-123".to_string(), 42);

    assert_eq!(device.id, 0);
    assert_eq!(device.fingerprint, "fp-123");
    assert_eq!(device.identity_id, 42);
    assert!(!device.confirmed);
}

#[test]
fn test_credential_issued_is_live() {
    let cred = CredentialRecord::issued("tok".to_string(), 7);

    assert!(!cred.pending);
    assert!(cred.correlation_id.is_none());
    assert!(cred.is_live());
}

#[test]
fn test_credential_pending_is_not_live() {
    let correlation = Uuid::new_v4();
    let cred = CredentialRecord::pending("tok".to_string(), 7, correlation);

    assert!(cred.pending);
    assert_eq!(cred.correlation_id, Some(correlation));
    assert!(!cred.is_live());
}

#[test]
fn test_validation_reason_round_trip() {
    assert_eq!(ValidationReason::Registration.as_str(), "registration");
    assert_eq!(ValidationReason::DeviceId.as_str(), "deviceId");
    assert_eq!(
        ValidationReason::from_str("deviceId").unwrap(),
        ValidationReason::DeviceId
    );
    assert!(ValidationReason::from_str("bogus").is_err());
}

#[test]
fn test_unavailable_receipt_has_no_id() {
    assert!(ValidationReceipt::unavailable().id.is_none());
}

#[test]
fn test_identity_never_serializes_password_hash() {
    let mut identity = Identity::placeholder("a@b.c");
    identity.password_hash = Some("$2b$12$secret".to_string());

    let json = serde_json::to_string(&identity).unwrap();
    assert!(!json.contains("password_hash"));
    assert!(!json.contains("secret"));
}
