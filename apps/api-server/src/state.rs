//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::PostService;
use blog_core::ports::PostRepository;
use blog_infra::InMemoryPostRepository;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    /// Name of the backing store, reported by the health check.
    pub store: &'static str,
}

impl AppState {
    pub fn new(repo: Arc<dyn PostRepository>, store: &'static str) -> Self {
        Self {
            posts: PostService::new(repo),
            store,
        }
    }

    /// State backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryPostRepository::new()), "memory")
    }

    /// Build the application state with the store selected by `config`.
    #[cfg(feature = "postgres")]
    pub async fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        use anyhow::Context;
        use blog_infra::PostgresPostRepository;
        use migration::{Migrator, MigratorTrait};

        let Some(db_config) = &config.database else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Ok(Self::in_memory());
        };

        let db = blog_infra::connect(db_config)
            .await
            .context("failed to connect to database")?;

        if config.auto_migrate {
            Migrator::up(&db, None)
                .await
                .context("failed to apply database migrations")?;
            tracing::info!("Database migrations applied");
        }

        tracing::info!("Application state initialized");

        Ok(Self::new(
            Arc::new(PostgresPostRepository::new(db)),
            "postgres",
        ))
    }

    #[cfg(not(feature = "postgres"))]
    pub async fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        if config.database.is_some() {
            tracing::warn!("DATABASE_URL ignored: built without postgres feature");
        }
        tracing::info!("Running without postgres feature - using in-memory repository");
        Ok(Self::in_memory())
    }
}
