mod cleanup_config;
mod config;
mod database_config;
mod directory_config;
mod error;
mod issuer_config;
mod log_level;
mod logging_config;
mod server_config;
mod validation_service_config;

pub use cleanup_config::CleanupConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use directory_config::DirectoryConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use issuer_config::IssuerConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use validation_service_config::ValidationServiceConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8600;
const MIN_PORT: u16 = 1024;
const DEFAULT_DATABASE_FILENAME: &str = "devicegate.db";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_ISSUER: &str = "security-service";
const DEFAULT_PRIVILEGED_ROLE: &str = "ROLE_ADMIN";
const DEFAULT_SESSION_TTL_MINS: u64 = 30;
const DEFAULT_SERVICE_TTL_MINS: u64 = 60;
const DEFAULT_SERVICE_SCOPE: &str = "users:read users:write";
const DEFAULT_DIRECTORY_URL: &str = "http://127.0.0.1:8601";
const DEFAULT_VALIDATION_URL: &str = "http://127.0.0.1:8602";
const DEFAULT_OUTBOUND_TIMEOUT_SECS: u64 = 5;
const DEFAULT_CLEANUP_INTERVAL_HOURS: u64 = 720;
