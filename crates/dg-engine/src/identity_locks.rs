//! Per-identity serialization for delete-then-insert credential turnover.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

/// Lazily grown map of one async mutex per identity id.
///
/// Holding the guard across the delete and the following insert keeps the
/// one-live-credential rule true for concurrent sign-ins in this process.
/// Entries are never evicted; each is a couple of words.
#[derive(Clone, Default)]
pub struct IdentityLocks {
    inner: Arc<Mutex<HashMap<i64, Arc<Mutex<()>>>>>,
}

impl IdentityLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the lock for one identity, blocking other issuance for the same
    /// identity until the returned guard drops.
    pub async fn acquire(&self, identity_id: i64) -> OwnedMutexGuard<()> {
        let lock = {
            let mut map = self.inner.lock().await;
            map.entry(identity_id).or_default().clone()
        };

        lock.lock_owned().await
    }
}
