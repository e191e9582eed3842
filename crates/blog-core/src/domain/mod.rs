//! Domain entities - the core business objects.

mod post;
mod query;

pub use post::{CreatePost, NewPost, Post, PostChanges, next_updated_at};
pub use query::{ListOptions, ParseSortError, PostFilter, SortField, SortOrder};
