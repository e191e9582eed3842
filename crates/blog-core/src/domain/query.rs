//! Filter and sort options for listing posts.

use std::cmp::Ordering;
use std::str::FromStr;

use thiserror::Error;

use super::Post;

/// Which posts a list operation returns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PostFilter {
    #[default]
    All,
    /// Exact match on `author`.
    Author(String),
    /// Posts whose `tags` contain the value.
    Tag(String),
}

impl PostFilter {
    pub fn matches(&self, post: &Post) -> bool {
        match self {
            PostFilter::All => true,
            PostFilter::Author(author) => post.author.as_deref() == Some(author.as_str()),
            PostFilter::Tag(tag) => post.tags.iter().any(|t| t == tag),
        }
    }
}

/// Field a post listing is ordered by. Any field of the record can be used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    Id,
    Title,
    Author,
    Contents,
    /// Element-wise, shorter lists first on a shared prefix.
    Tags,
    #[default]
    CreatedAt,
    UpdatedAt,
}

impl FromStr for SortField {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" | "_id" => Ok(SortField::Id),
            "title" => Ok(SortField::Title),
            "author" => Ok(SortField::Author),
            "contents" => Ok(SortField::Contents),
            "tags" => Ok(SortField::Tags),
            "createdAt" | "created_at" => Ok(SortField::CreatedAt),
            "updatedAt" | "updated_at" => Ok(SortField::UpdatedAt),
            other => Err(ParseSortError::Field(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl FromStr for SortOrder {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" | "1" => Ok(SortOrder::Ascending),
            "desc" | "descending" | "-1" => Ok(SortOrder::Descending),
            _ => Err(ParseSortError::Order(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseSortError {
    #[error("unknown sort field `{0}`")]
    Field(String),

    #[error("unknown sort order `{0}`, expected ascending or descending")]
    Order(String),
}

/// Sort options for a listing. Defaults to newest-created first.
///
/// Posts with equal sort keys come back in no particular order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub sort_by: SortField,
    pub sort_order: SortOrder,
}

impl ListOptions {
    pub fn new(sort_by: SortField, sort_order: SortOrder) -> Self {
        Self {
            sort_by,
            sort_order,
        }
    }

    /// Ordering of two posts under these options.
    pub fn compare(&self, a: &Post, b: &Post) -> Ordering {
        let ordering = match self.sort_by {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Title => a.title.cmp(&b.title),
            SortField::Author => a.author.cmp(&b.author),
            SortField::Contents => a.contents.cmp(&b.contents),
            SortField::Tags => a.tags.cmp(&b.tags),
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        };

        match self.sort_order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}
