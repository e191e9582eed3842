//! # Blog Core
//!
//! The domain layer of the blog backend.
//! This crate holds the post record schema, the repository ports and the post
//! service. It has no database or HTTP dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::{DomainError, RepoError};
pub use service::PostService;
