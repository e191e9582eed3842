use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{ListOptions, NewPost, Post, PostChanges, PostFilter};
use crate::error::RepoError;

/// Generic repository trait for lookups and removal by primary key.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Delete an entity by its ID, returning how many records were removed.
    async fn delete(&self, id: ID) -> Result<u64, RepoError>;
}

/// Post repository. Every method is a single store round trip.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// Persist a new post. The store assigns the id and both timestamps.
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError>;

    /// All posts matching `filter`, ordered by `options`.
    async fn find(
        &self,
        filter: PostFilter,
        options: ListOptions,
    ) -> Result<Vec<Post>, RepoError>;

    /// Apply `changes` to the post with `id` and refresh `updated_at`.
    /// Returns `None` if no post has that id.
    async fn update(&self, id: Uuid, changes: PostChanges) -> Result<Option<Post>, RepoError>;
}
