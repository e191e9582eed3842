use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{CreatePost, ListOptions, NewPost, Post, PostChanges, PostFilter};
use crate::error::DomainError;
use crate::ports::PostRepository;

/// Post query/update service.
///
/// Stateless apart from the repository handle; each operation issues exactly
/// one repository call.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// Validate and persist a new post.
    pub async fn create(&self, input: CreatePost) -> Result<Post, DomainError> {
        let draft = NewPost::try_from(input)?;
        let post = self.repo.insert(draft).await?;
        tracing::debug!(post_id = %post.id, "Post created");
        Ok(post)
    }

    pub async fn list(
        &self,
        filter: PostFilter,
        options: ListOptions,
    ) -> Result<Vec<Post>, DomainError> {
        Ok(self.repo.find(filter, options).await?)
    }

    pub async fn list_all(&self, options: ListOptions) -> Result<Vec<Post>, DomainError> {
        self.list(PostFilter::All, options).await
    }

    pub async fn list_by_author(
        &self,
        author: impl Into<String>,
        options: ListOptions,
    ) -> Result<Vec<Post>, DomainError> {
        self.list(PostFilter::Author(author.into()), options).await
    }

    pub async fn list_by_tag(
        &self,
        tag: impl Into<String>,
        options: ListOptions,
    ) -> Result<Vec<Post>, DomainError> {
        self.list(PostFilter::Tag(tag.into()), options).await
    }

    /// Look up a post. A missing post is `Ok(None)`, not an error.
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Post>, DomainError> {
        Ok(self.repo.find_by_id(id).await?)
    }

    /// Partially update a post; fields absent from `changes` keep their values.
    pub async fn update(
        &self,
        id: Uuid,
        changes: PostChanges,
    ) -> Result<Option<Post>, DomainError> {
        changes.validate()?;
        let post = self.repo.update(id, changes).await?;
        if post.is_none() {
            tracing::debug!(post_id = %id, "Update matched no post");
        }
        Ok(post)
    }

    /// Hard-delete a post, returning how many records were removed (0 or 1).
    pub async fn delete(&self, id: Uuid) -> Result<u64, DomainError> {
        Ok(self.repo.delete(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::error::RepoError;
    use crate::ports::BaseRepository;

    /// Repository that counts calls and fails every query.
    #[derive(Default)]
    struct FailingRepository {
        calls: AtomicUsize,
    }

    impl FailingRepository {
        fn fail(&self) -> RepoError {
            self.calls.fetch_add(1, Ordering::SeqCst);
            RepoError::Query("connection reset".to_string())
        }
    }

    #[async_trait]
    impl BaseRepository<Post, Uuid> for FailingRepository {
        async fn find_by_id(&self, _id: Uuid) -> Result<Option<Post>, RepoError> {
            Err(self.fail())
        }

        async fn delete(&self, _id: Uuid) -> Result<u64, RepoError> {
            Err(self.fail())
        }
    }

    #[async_trait]
    impl PostRepository for FailingRepository {
        async fn insert(&self, _post: NewPost) -> Result<Post, RepoError> {
            Err(self.fail())
        }

        async fn find(
            &self,
            _filter: PostFilter,
            _options: ListOptions,
        ) -> Result<Vec<Post>, RepoError> {
            Err(self.fail())
        }

        async fn update(
            &self,
            _id: Uuid,
            _changes: PostChanges,
        ) -> Result<Option<Post>, RepoError> {
            Err(self.fail())
        }
    }

    #[tokio::test]
    async fn test_create_without_title_never_reaches_store() {
        let repo = Arc::new(FailingRepository::default());
        let service = PostService::new(repo.clone());

        let err = service.create(CreatePost::default()).await.unwrap_err();

        assert!(matches!(err, DomainError::Validation { field: "title" }));
        assert_eq!(repo.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_update_with_empty_title_never_reaches_store() {
        let repo = Arc::new(FailingRepository::default());
        let service = PostService::new(repo.clone());

        let changes = PostChanges {
            title: Some(String::new()),
            ..PostChanges::default()
        };
        let err = service.update(Uuid::new_v4(), changes).await.unwrap_err();

        assert!(matches!(err, DomainError::Validation { field: "title" }));
        assert_eq!(repo.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_store_errors_propagate() {
        let repo = Arc::new(FailingRepository::default());
        let service = PostService::new(repo.clone());

        let err = service.get_by_id(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, DomainError::Repository(RepoError::Query(_))));

        let err = service.list_all(ListOptions::default()).await.unwrap_err();
        assert!(matches!(err, DomainError::Repository(_)));

        assert_eq!(repo.calls.load(Ordering::SeqCst), 2);
    }
}
