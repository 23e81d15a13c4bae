//! Application configuration loaded from environment variables.

use std::env;

use rotta_infra::database::DatabaseConfig;

#[cfg(feature = "anthropic")]
use rotta_infra::AnthropicConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Absent means the in-memory store.
    pub database: Option<DatabaseConfig>,
    #[cfg(feature = "anthropic")]
    pub anthropic: AnthropicConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(100),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database,
            #[cfg(feature = "anthropic")]
            anthropic: AnthropicConfig::from_env(),
        }
    }
}
