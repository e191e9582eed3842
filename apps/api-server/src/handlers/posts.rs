//! Post handlers.

use actix_web::{HttpResponse, web};
use chrono::SecondsFormat;
use uuid::Uuid;

use blog_core::domain::{
    CreatePost, ListOptions, ParseSortError, Post, PostChanges, SortField, SortOrder,
};
use blog_shared::dto::{CreatePostRequest, ListPostsQuery, PostResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        title: post.title,
        author: post.author,
        contents: post.contents,
        tags: post.tags,
        created_at: post.created_at.to_rfc3339_opts(SecondsFormat::Micros, true),
        updated_at: post.updated_at.to_rfc3339_opts(SecondsFormat::Micros, true),
    }
}

/// An id that is not a UUID cannot name a stored post.
fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}

/// Empty query values count as absent.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn list_options(sort_by: Option<String>, sort_order: Option<String>) -> AppResult<ListOptions> {
    let mut options = ListOptions::default();
    if let Some(sort_by) = sort_by {
        options.sort_by = sort_by.parse::<SortField>().map_err(bad_sort)?;
    }
    if let Some(sort_order) = sort_order {
        options.sort_order = sort_order.parse::<SortOrder>().map_err(bad_sort)?;
    }
    Ok(options)
}

fn bad_sort(err: ParseSortError) -> AppError {
    AppError::BadRequest(err.to_string())
}

/// GET /api/v1/posts
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    let author = present(query.author);
    let tag = present(query.tag);

    if author.is_some() && tag.is_some() {
        return Err(AppError::BadRequest(
            "query by either author or tag, not both".to_string(),
        ));
    }

    let options = list_options(present(query.sort_by), present(query.sort_order))?;

    let posts = match (author, tag) {
        (Some(author), _) => state.posts.list_by_author(author, options).await?,
        (None, Some(tag)) => state.posts.list_by_tag(tag, options).await?,
        (None, None) => state.posts.list_all(options).await?,
    };

    let body: Vec<PostResponse> = posts.into_iter().map(to_response).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/v1/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let Some(id) = parse_id(&path) else {
        return Err(AppError::NotFound);
    };

    match state.posts.get_by_id(id).await? {
        Some(post) => Ok(HttpResponse::Ok().json(to_response(post))),
        None => Err(AppError::NotFound),
    }
}

/// POST /api/v1/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let input = CreatePost {
        title: req.title,
        author: req.author,
        contents: req.contents,
        tags: req.tags.unwrap_or_default(),
    };

    let post = state.posts.create(input).await?;
    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// PATCH /api/v1/posts/{id}
///
/// Answers `200 null` rather than 404 when no post has the id.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let changes = PostChanges {
        title: req.title,
        author: req.author,
        contents: req.contents,
        tags: req.tags,
    };

    let post = match parse_id(&path) {
        Some(id) => state.posts.update(id, changes).await?,
        None => None,
    };

    Ok(HttpResponse::Ok().json(post.map(to_response)))
}

/// DELETE /api/v1/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let Some(id) = parse_id(&path) else {
        return Err(AppError::NotFound);
    };

    match state.posts.delete(id).await? {
        0 => Err(AppError::NotFound),
        _ => Ok(HttpResponse::NoContent().finish()),
    }
}
