//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod auth;
pub mod database;
pub mod logging;
pub mod seed;

use serde::{Deserialize, Serialize};
use tracing::warn;

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::AuthConfig;
pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;
pub use self::seed::SeedConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Account store settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Startup seeding settings.
    #[serde(default)]
    pub seed: SeedConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `KEYWARD_`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("KEYWARD")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the auth subsystem depends on.
    ///
    /// The signing key and pepper are read once at startup and never
    /// change afterwards, so a bad value here is fatal.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.auth.jwt_secret.is_empty() {
            return Err(AppError::configuration("auth.jwt_secret must not be empty"));
        }
        if self.auth.pepper.is_empty() {
            return Err(AppError::configuration("auth.pepper must not be empty"));
        }
        if self.auth.token_ttl_seconds == 0 {
            return Err(AppError::configuration(
                "auth.token_ttl_seconds must be greater than zero",
            ));
        }
        if self.auth.hash_cost == 0 {
            return Err(AppError::configuration(
                "auth.hash_cost must be greater than zero",
            ));
        }
        if self.auth.uses_placeholder_secrets() {
            warn!("auth.jwt_secret or auth.pepper is still the shipped placeholder");
        }
        Ok(())
    }
}
