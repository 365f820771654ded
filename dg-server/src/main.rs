pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

pub use api::error::{ApiError, Result as ApiResult};
pub use api::{
    devices::{confirm_device_request::ConfirmDeviceRequest, devices::confirm_device},
    service_token::get_service_token,
    sign_in::{
        release_request::ReleaseRequest,
        sign_in::{release_credential, sign_in},
        sign_in_denied::SignInDenied,
        sign_in_request::SignInRequest,
        sign_in_response::SignInResponse,
    },
    users::{
        user_list_response::UserListResponse,
        user_response::UserResponse,
        users::{get_user, get_user_by_email, list_users},
    },
};
pub use app_state::AppState;
pub use routes::build_router;

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use dg_clients::{DirectoryAuthenticator, DirectoryClient, ValidationClient};
use dg_engine::{DeviceConfirmation, IssuanceEngine, PendingRelease};
use dg_token::{ServiceTokenMinter, TokenCodec, TokenKeys};

use log::{error, info, warn};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = dg_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = dg_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting dg-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(database_path)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .busy_timeout(Duration::from_secs(5)),
        )
        .await?;

    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    dg_db::MIGRATOR.run(&pool).await?;
    info!("Migrations complete");

    // Two independent ephemeral keypairs: session credentials and
    // service-to-service credentials never share signing material.
    // Every restart invalidates all outstanding tokens.
    let session_codec = Arc::new(TokenCodec::new(TokenKeys::ephemeral()?));
    let minter = Arc::new(ServiceTokenMinter::new(
        TokenCodec::new(TokenKeys::ephemeral()?),
        &config.issuer.name,
        &config.issuer.service_scope,
        config.issuer.service_ttl_mins,
    ));
    info!("Ephemeral signing keys generated");

    // Outbound clients
    let directory = Arc::new(DirectoryClient::new(
        &config.directory.base_url,
        Duration::from_secs(config.directory.timeout_secs),
    )?);
    let validation = Arc::new(ValidationClient::new(
        &config.validation.base_url,
        Duration::from_secs(config.validation.timeout_secs),
    )?);

    let authenticator = Arc::new(DirectoryAuthenticator::new(
        Arc::clone(&directory),
        Arc::clone(&minter),
    ));

    let engine = Arc::new(IssuanceEngine::new(
        pool.clone(),
        validation,
        Arc::clone(&minter),
        Arc::clone(&session_codec),
        config.issuer.clone(),
    ));

    // Build application state
    let app_state = AppState {
        pool: pool.clone(),
        engine,
        release: Arc::new(PendingRelease::new(pool.clone())),
        confirmation: Arc::new(DeviceConfirmation::new(pool.clone())),
        authenticator,
        directory,
        minter,
    };

    // Build router
    let app = build_router(app_state);

    // Periodic credential sweep
    if config.cleanup.enabled {
        let interval = Duration::from_secs(config.cleanup.interval_hours * 3600);
        let cleanup_pool = pool.clone();

        info!(
            "Credential cleanup enabled: every {}h",
            config.cleanup.interval_hours
        );

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // First tick fires immediately; skip it so startup stays quiet
            ticker.tick().await;

            loop {
                ticker.tick().await;
                if let Err(e) = dg_engine::purge_defunct_credentials(&cleanup_pool).await {
                    warn!("Credential cleanup failed: {}", e);
                }
            }
        });
    }

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Server listening on {}", listener.local_addr()?);

    // Start server with graceful shutdown on Ctrl+C
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}
