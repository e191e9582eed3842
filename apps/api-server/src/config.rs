//! Application configuration loaded from environment variables.

use std::env;

use blog_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` runs the server against the in-memory store.
    pub database: Option<DatabaseConfig>,
    /// Apply pending schema migrations before serving.
    pub auto_migrate: bool,
    /// Origins allowed by CORS. Empty allows any origin.
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| {
            let defaults = DatabaseConfig::new(url);
            DatabaseConfig {
                max_connections: parse_var("DB_MAX_CONNECTIONS")
                    .unwrap_or(defaults.max_connections),
                min_connections: parse_var("DB_MIN_CONNECTIONS")
                    .unwrap_or(defaults.min_connections),
                ..defaults
            }
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT").unwrap_or(8080),
            database,
            auto_migrate: env::var("DB_AUTO_MIGRATE")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
            cors_origins: env::var("CORS_ALLOWED_ORIGINS")
                .map(|v| {
                    v.split(',')
                        .map(str::trim)
                        .filter(|o| !o.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}
