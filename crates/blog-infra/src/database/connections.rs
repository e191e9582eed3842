#[cfg(feature = "postgres")]
use std::time::Duration;

#[cfg(feature = "postgres")]
use blog_core::RepoError;
#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, Database, DbConn};

/// Configuration for the post store.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 100,
            min_connections: 10,
        }
    }
}

/// Open a pooled connection to the post store.
///
/// Request timeouts are inherited from these pool options; nothing above the
/// repository layer adds its own.
#[cfg(feature = "postgres")]
pub async fn connect(config: &DatabaseConfig) -> Result<DbConn, RepoError> {
    tracing::info!("Connecting to database...");

    let opts = ConnectOptions::new(&config.url)
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(true)
        .to_owned();

    let db = Database::connect(opts)
        .await
        .map_err(|e| RepoError::Connection(e.to_string()))?;

    tracing::info!("Database connected (pool: {})", config.max_connections);
    Ok(db)
}
