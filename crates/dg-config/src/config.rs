use crate::{
    CleanupConfig, ConfigError, ConfigErrorResult, DatabaseConfig, DirectoryConfig, IssuerConfig,
    LoggingConfig, ServerConfig, ValidationServiceConfig,
};

use std::path::PathBuf;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub issuer: IssuerConfig,
    pub directory: DirectoryConfig,
    pub validation: ValidationServiceConfig,
    pub cleanup: CleanupConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for DG_CONFIG_DIR env var, else use ./.dg/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply DG_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: DG_CONFIG_DIR env var > ./.dg/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("DG_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".dg"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.issuer.validate()?;
        self.directory.validate()?;
        self.validation.validate()?;
        self.cleanup.validate()?;

        // Validate database path doesn't escape config dir
        let db_path = std::path::Path::new(&self.database.path);
        if db_path.is_absolute() || self.database.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  database: {}", self.database.path);
        info!(
            "  issuer: {} (session ttl {}m, service ttl {}m, privileged role {})",
            self.issuer.name,
            self.issuer.session_ttl_mins,
            self.issuer.service_ttl_mins,
            self.issuer.privileged_role
        );
        info!(
            "  directory: {} (timeout {}s)",
            self.directory.base_url, self.directory.timeout_secs
        );
        info!(
            "  validation: {} (timeout {}s)",
            self.validation.base_url, self.validation.timeout_secs
        );
        info!(
            "  cleanup: {} (every {}h)",
            if self.cleanup.enabled {
                "enabled"
            } else {
                "disabled"
            },
            self.cleanup.interval_hours
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("DG_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("DG_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("DG_DATABASE_PATH", &mut self.database.path);

        // Issuer
        Self::apply_env_string("DG_ISSUER_NAME", &mut self.issuer.name);
        Self::apply_env_string("DG_PRIVILEGED_ROLE", &mut self.issuer.privileged_role);
        Self::apply_env_parse("DG_SESSION_TTL_MINS", &mut self.issuer.session_ttl_mins);
        Self::apply_env_parse("DG_SERVICE_TTL_MINS", &mut self.issuer.service_ttl_mins);
        Self::apply_env_string("DG_SERVICE_SCOPE", &mut self.issuer.service_scope);

        // Collaborators
        Self::apply_env_string("DG_DIRECTORY_URL", &mut self.directory.base_url);
        Self::apply_env_parse("DG_DIRECTORY_TIMEOUT_SECS", &mut self.directory.timeout_secs);
        Self::apply_env_string("DG_VALIDATION_URL", &mut self.validation.base_url);
        Self::apply_env_parse(
            "DG_VALIDATION_TIMEOUT_SECS",
            &mut self.validation.timeout_secs,
        );

        // Cleanup
        Self::apply_env_bool("DG_CLEANUP_ENABLED", &mut self.cleanup.enabled);
        Self::apply_env_parse(
            "DG_CLEANUP_INTERVAL_HOURS",
            &mut self.cleanup.interval_hours,
        );

        // Logging
        Self::apply_env_parse("DG_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("DG_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("DG_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = if val.is_empty() { None } else { Some(val) };
        }
    }
}
