use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Post entity - represents a stored blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub author: Option<String>,
    pub contents: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw creation input, as received from a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreatePost {
    pub title: Option<String>,
    pub author: Option<String>,
    pub contents: Option<String>,
    pub tags: Vec<String>,
}

impl CreatePost {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}

/// A validated post that has not been stored yet.
///
/// Only obtainable through `TryFrom<CreatePost>`, so a `NewPost` always
/// carries a non-empty title. Id and timestamps are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    title: String,
    author: Option<String>,
    contents: Option<String>,
    tags: Vec<String>,
}

impl NewPost {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Materialize the draft with a store-assigned id and creation time.
    pub fn into_post(self, id: Uuid, now: DateTime<Utc>) -> Post {
        Post {
            id,
            title: self.title,
            author: self.author,
            contents: self.contents,
            tags: self.tags,
            created_at: now,
            updated_at: now,
        }
    }
}

impl TryFrom<CreatePost> for NewPost {
    type Error = DomainError;

    fn try_from(input: CreatePost) -> Result<Self, Self::Error> {
        let title = match input.title {
            Some(title) if !title.is_empty() => title,
            _ => return Err(DomainError::Validation { field: "title" }),
        };

        Ok(Self {
            title,
            author: input.author,
            contents: input.contents,
            tags: input.tags,
        })
    }
}

/// Partial update of a post. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostChanges {
    pub title: Option<String>,
    pub author: Option<String>,
    pub contents: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl PostChanges {
    /// Reject changes that would leave a post without a title.
    pub fn validate(&self) -> Result<(), DomainError> {
        match &self.title {
            Some(title) if title.is_empty() => Err(DomainError::Validation { field: "title" }),
            _ => Ok(()),
        }
    }

    /// Apply the present fields to `post` and refresh its `updated_at`.
    pub fn apply(self, post: &mut Post, now: DateTime<Utc>) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(author) = self.author {
            post.author = Some(author);
        }
        if let Some(contents) = self.contents {
            post.contents = Some(contents);
        }
        if let Some(tags) = self.tags {
            post.tags = tags;
        }
        post.updated_at = next_updated_at(post.updated_at, now);
    }
}

/// Timestamp for an update: `now`, bumped past `previous` when the clock has
/// not advanced.
pub fn next_updated_at(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(title: &str) -> Post {
        NewPost::try_from(CreatePost::titled(title))
            .unwrap()
            .into_post(Uuid::new_v4(), Utc::now())
    }

    #[test]
    fn test_missing_title_is_rejected() {
        let input = CreatePost {
            author: Some("Test Author".to_string()),
            ..CreatePost::default()
        };

        let err = NewPost::try_from(input).unwrap_err();
        assert!(matches!(err, DomainError::Validation { field: "title" }));
        assert!(err.to_string().contains("`title` is required"));
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let err = NewPost::try_from(CreatePost::titled("")).unwrap_err();
        assert!(matches!(err, DomainError::Validation { field: "title" }));
    }

    #[test]
    fn test_new_post_timestamps_match() {
        let post = stored("Only a title");
        assert_eq!(post.created_at, post.updated_at);
        assert!(post.tags.is_empty());
        assert_eq!(post.author, None);
    }

    #[test]
    fn test_apply_keeps_absent_fields() {
        let mut post = stored("Learning Redux");
        post.tags = vec!["redux".to_string()];
        let before = post.clone();

        let changes = PostChanges {
            author: Some("Dr. Angel Wyatt".to_string()),
            ..PostChanges::default()
        };
        changes.apply(&mut post, before.updated_at);

        assert_eq!(post.author.as_deref(), Some("Dr. Angel Wyatt"));
        assert_eq!(post.title, before.title);
        assert_eq!(post.tags, before.tags);
        assert_eq!(post.created_at, before.created_at);
        assert!(post.updated_at > before.updated_at);
    }

    #[test]
    fn test_empty_title_change_is_rejected() {
        let changes = PostChanges {
            title: Some(String::new()),
            ..PostChanges::default()
        };
        assert!(changes.validate().is_err());
        assert!(PostChanges::default().validate().is_ok());
    }

    #[test]
    fn test_next_updated_at_is_strictly_later() {
        let now = Utc::now();
        assert!(next_updated_at(now, now) > now);
        assert!(next_updated_at(now, now - Duration::seconds(5)) > now);

        let later = now + Duration::seconds(1);
        assert_eq!(next_updated_at(now, later), later);
    }
}
