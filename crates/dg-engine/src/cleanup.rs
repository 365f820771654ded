//! Periodic sweep of credential rows flagged both revoked and expired.

use crate::Result as EngineResult;

use dg_db::CredentialRepository;

use log::{debug, info};
use sqlx::SqlitePool;

/// Delete every credential row carrying both legacy status flags.
///
/// Issuance never sets those flags, so under normal operation this removes
/// nothing; it exists to drain rows written by older deployments or by
/// operators flagging records by hand.
pub async fn purge_defunct_credentials(pool: &SqlitePool) -> EngineResult<u64> {
    let removed = CredentialRepository::new(pool.clone())
        .delete_defunct()
        .await?;

    if removed > 0 {
        info!("Cleanup removed {removed} defunct credential(s)");
    } else {
        debug!("Cleanup found no defunct credentials");
    }

    Ok(removed)
}
