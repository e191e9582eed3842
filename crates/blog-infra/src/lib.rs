//! # Blog Infrastructure
//!
//! Concrete implementations of the repository ports defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL storage via SeaORM
//! - `minimal` - No external dependencies, in-memory store only

pub mod database;

pub use database::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "postgres")]
pub use database::{PostgresPostRepository, connect};
