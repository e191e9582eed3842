//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Request body for creating a post.
///
/// `title` is optional here so that a missing title reaches the domain
/// validation instead of failing JSON extraction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub contents: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Request body for a partial post update. Omitted or `null` fields are
/// left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub contents: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Query parameters accepted by `GET /api/v1/posts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPostsQuery {
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub author: Option<String>,
    pub tag: Option<String>,
}

/// A stored post as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub author: Option<String>,
    pub contents: Option<String>,
    pub tags: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}
