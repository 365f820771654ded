mod common;

use crate::common::test_db::create_test_pool;

use dg_core::DeviceRecord;
use dg_db::DeviceRepository;

#[tokio::test]
async fn test_create_and_find_by_fingerprint() {
    let pool = create_test_pool().await;
    let repo = DeviceRepository::new(pool);

    let device = DeviceRecord::unconfirmed("fp-abc".to_string(), 5);
    let id = repo.create(&device).await.unwrap();
    assert!(id > 0);

    let found = repo.find_by_fingerprint("fp-abc").await.unwrap().unwrap();
    assert_eq!(found.id, id);
    assert_eq!(found.fingerprint, "fp-abc");
    assert_eq!(found.identity_id, 5);
    assert!(!found.confirmed);
}

#[tokio::test]
async fn test_find_by_fingerprint_missing() {
    let pool = create_test_pool().await;
    let repo = DeviceRepository::new(pool);

    let found = repo.find_by_fingerprint("never-seen").await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_fingerprint_is_unique() {
    let pool = create_test_pool().await;
    let repo = DeviceRepository::new(pool);

    let device = DeviceRecord::unconfirmed("fp-dup".to_string(), 1);
    repo.create(&device).await.unwrap();

    let duplicate = DeviceRecord::unconfirmed("fp-dup".to_string(), 2);
    assert!(repo.create(&duplicate).await.is_err());
}

#[tokio::test]
async fn test_mark_confirmed() {
    let pool = create_test_pool().await;
    let repo = DeviceRepository::new(pool);

    let device = DeviceRecord::unconfirmed("fp-xyz".to_string(), 9);
    let id = repo.create(&device).await.unwrap();

    let affected = repo.mark_confirmed(id).await.unwrap();
    assert_eq!(affected, 1);

    let found = repo.find_by_id(id).await.unwrap().unwrap();
    assert!(found.confirmed);
}

#[tokio::test]
async fn test_mark_confirmed_missing_is_noop() {
    let pool = create_test_pool().await;
    let repo = DeviceRepository::new(pool);

    let affected = repo.mark_confirmed(424242).await.unwrap();
    assert_eq!(affected, 0);
}
