//! Configuration loader with layered sources.

use crate::AppConfig;
use bannerd_core::BannerdError;
use config::{Config, Environment, File};
use std::path::Path;
use tracing::{debug, info};

/// Loads configuration from layered sources.
///
/// Sources are merged in order, later ones overriding earlier ones:
/// 1. `{config_dir}/default.toml`
/// 2. `{config_dir}/{environment}.toml` (from `BANNERD_ENVIRONMENT`)
/// 3. `{config_dir}/local.toml` (uncommitted overrides)
/// 4. Environment variables with the `BANNERD` prefix
///    (e.g. `BANNERD_DATABASE__URL`)
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<AppConfig, BannerdError> {
        Self::load("./config")
    }

    /// Loads configuration from the given directory.
    pub fn load(config_dir: impl AsRef<Path>) -> Result<AppConfig, BannerdError> {
        let config_dir = config_dir.as_ref();

        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("BANNERD_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for name in ["default".to_string(), environment, "local".to_string()] {
            let path = config_dir.join(format!("{}.toml", name));
            if path.exists() {
                debug!("Loading config from: {}", path.display());
                builder = builder.add_source(File::from(path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("BANNERD")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| BannerdError::Configuration(e.to_string()))?;

        let app_config: AppConfig = config
            .try_deserialize()
            .map_err(|e| BannerdError::Configuration(e.to_string()))?;

        validate(&app_config)?;

        Ok(app_config)
    }
}

/// Validates critical configuration before the server starts.
fn validate(config: &AppConfig) -> Result<(), BannerdError> {
    if config.database.url.trim().is_empty() {
        return Err(BannerdError::Configuration(
            "database.url must not be empty".to_string(),
        ));
    }
    if config.server.port == 0 {
        return Err(BannerdError::Configuration(
            "server.port must not be 0".to_string(),
        ));
    }
    if config.cache.banner_ttl_secs == 0 || config.cache.auth_ttl_secs == 0 {
        return Err(BannerdError::Configuration(
            "cache TTLs must be non-zero".to_string(),
        ));
    }
    if config.seed.user_token.is_empty() || config.seed.admin_token.is_empty() {
        return Err(BannerdError::Configuration(
            "seed tokens must not be empty".to_string(),
        ));
    }
    Ok(())
}
