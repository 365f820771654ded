//! Shared state handed to every request handler.

use std::sync::Arc;

use dg_clients::{DirectoryAuthenticator, DirectoryClient};
use dg_engine::{DeviceConfirmation, IssuanceEngine, PendingRelease};
use dg_token::ServiceTokenMinter;

use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub engine: Arc<IssuanceEngine>,
    pub release: Arc<PendingRelease>,
    pub confirmation: Arc<DeviceConfirmation>,
    pub authenticator: Arc<DirectoryAuthenticator>,
    pub directory: Arc<DirectoryClient>,
    pub minter: Arc<ServiceTokenMinter>,
}
