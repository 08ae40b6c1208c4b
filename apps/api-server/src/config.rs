//! Application configuration loaded from environment variables.

use std::env;

use anyhow::Context;

use blog_infra::DatabaseConfig;

/// Default upload cap, overridable via MAX_FILE_SIZE.
const DEFAULT_MAX_FILE_SIZE: usize = 5 * 1024 + 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub env: AppEnv,
    /// Allowed cross-origin source; same-origin only when unset.
    pub cors_origin: Option<String>,
    pub max_upload_bytes: usize,
    pub jwt_secret: String,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// The database variables are required; startup fails fast without
    /// them. Production mode silences SQL logging and enforces SSL.
    pub fn from_env() -> anyhow::Result<Self> {
        let app_env = match env::var("APP_ENV").as_deref() {
            Ok("production") => AppEnv::Production,
            _ => AppEnv::Development,
        };

        let ssl_mode = match app_env {
            AppEnv::Production => env::var("DB_SSL_MODE")
                .ok()
                .or_else(|| Some("require".to_owned())),
            AppEnv::Development => env::var("DB_SSL_MODE").ok(),
        };

        let database = DatabaseConfig {
            host: env::var("DB_HOST").context("DB_HOST is required")?,
            port: env::var("DB_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5432),
            name: env::var("DB_NAME").context("DB_NAME is required")?,
            user: env::var("DB_USER").context("DB_USER is required")?,
            password: env::var("DB_PASSWORD").context("DB_PASSWORD is required")?,
            ssl_mode,
            sql_logging: app_env == AppEnv::Development,
        };

        let jwt_secret = match env::var("JWT_SECRET") {
            Ok(secret) => secret,
            Err(_) if app_env == AppEnv::Production => {
                anyhow::bail!("JWT_SECRET is required in production")
            }
            Err(_) => {
                tracing::warn!("JWT_SECRET not set - using a development-only secret");
                "dev-secret".to_owned()
            }
        };

        Ok(Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            env: app_env,
            cors_origin: env::var("CORS_ORIGIN").ok(),
            max_upload_bytes: env::var("MAX_FILE_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_FILE_SIZE),
            jwt_secret,
            database,
        })
    }
}
