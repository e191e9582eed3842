//! In-memory post repository - used when no database is configured and in tests.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::{ListOptions, NewPost, Post, PostChanges, PostFilter};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, PostRepository};

/// In-memory post store using a HashMap behind an async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<HashMap<Uuid, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

/// Current time at the microsecond precision PostgreSQL stores.
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn delete(&self, id: Uuid) -> Result<u64, RepoError> {
        let removed = self.store.write().await.remove(&id);
        Ok(u64::from(removed.is_some()))
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        let post = post.into_post(Uuid::new_v4(), now());
        self.store.write().await.insert(post.id, post.clone());
        Ok(post)
    }

    async fn find(
        &self,
        filter: PostFilter,
        options: ListOptions,
    ) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        let mut posts: Vec<Post> = store
            .values()
            .filter(|post| filter.matches(post))
            .cloned()
            .collect();
        drop(store);

        posts.sort_by(|a, b| options.compare(a, b));
        Ok(posts)
    }

    async fn update(&self, id: Uuid, changes: PostChanges) -> Result<Option<Post>, RepoError> {
        let mut store = self.store.write().await;
        let Some(post) = store.get_mut(&id) else {
            return Ok(None);
        };

        changes.apply(post, now());
        Ok(Some(post.clone()))
    }
}
