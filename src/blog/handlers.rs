use super::types::{now_ms, BlogPost, BlogPostInput};
use crate::admin;
use crate::config::Config;
use crate::store::Collection;
use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

#[derive(Deserialize, Default)]
pub struct BlogParams {
    pub id: Option<String>,
    pub admin: Option<String>,
}

#[derive(Serialize)]
pub struct BlogSaveResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Published posts, newest first. The admin variant includes drafts.
pub fn list_posts(posts: &Collection<BlogPost>, include_drafts: bool) -> Vec<BlogPost> {
    let mut listed: Vec<BlogPost> = posts
        .entries()
        .into_iter()
        .map(|(_, post)| post)
        .filter(|post| include_drafts || post.is_published)
        .collect();
    listed.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
    listed
}

/// `GET /api/blog`: list published posts; `?id=` fetches one post;
/// `?admin=true` lists drafts too (admin only).
pub async fn handle_get_posts(
    Query(params): Query<BlogParams>,
    Extension(posts): Extension<Arc<Collection<BlogPost>>>,
    Extension(config): Extension<Arc<Config>>,
    headers: HeaderMap,
) -> (StatusCode, Json<serde_json::Value>) {
    if let Some(id) = params.id {
        return match posts.get(&id) {
            Some(post) => (StatusCode::OK, Json(json!(post))),
            None => (StatusCode::NOT_FOUND, Json(json!({ "error": "Not Found" }))),
        };
    }

    let wants_drafts = params.admin.as_deref() == Some("true");
    if wants_drafts && !admin::is_authorized(&config, &headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Unauthorized" })),
        );
    }

    (StatusCode::OK, Json(json!(list_posts(&posts, wants_drafts))))
}

/// `POST /api/blog`: create a post or update an existing one. Admin only.
pub async fn handle_save_post(
    Query(params): Query<BlogParams>,
    Extension(posts): Extension<Arc<Collection<BlogPost>>>,
    Extension(config): Extension<Arc<Config>>,
    headers: HeaderMap,
    Json(input): Json<BlogPostInput>,
) -> (StatusCode, Json<BlogSaveResponse>) {
    if !admin::is_authorized(&config, &headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(BlogSaveResponse {
                success: false,
                id: None,
            }),
        );
    }

    let id = params
        .id
        .or(input.id)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    let created_at = posts
        .get(&id)
        .map(|existing| existing.created_at)
        .unwrap_or_else(now_ms);

    let post = BlogPost {
        id: id.clone(),
        title: input.title,
        content: input.content,
        is_published: input.is_published,
        created_at,
        updated_at: now_ms(),
        image_url: input.image_url,
    };

    match posts.put(&id, post).await {
        Ok(_) => (
            StatusCode::OK,
            Json(BlogSaveResponse {
                success: true,
                id: Some(id),
            }),
        ),
        Err(e) => {
            tracing::error!("Failed to save blog post {}: {}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(BlogSaveResponse {
                    success: false,
                    id: Some(id),
                }),
            )
        }
    }
}

/// `DELETE /api/blog?id=`: remove a post. Admin only.
pub async fn handle_delete_post(
    Query(params): Query<BlogParams>,
    Extension(posts): Extension<Arc<Collection<BlogPost>>>,
    Extension(config): Extension<Arc<Config>>,
    headers: HeaderMap,
) -> (StatusCode, Json<BlogSaveResponse>) {
    if !admin::is_authorized(&config, &headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(BlogSaveResponse {
                success: false,
                id: None,
            }),
        );
    }

    let Some(id) = params.id else {
        return (
            StatusCode::BAD_REQUEST,
            Json(BlogSaveResponse {
                success: false,
                id: None,
            }),
        );
    };

    match posts.delete(&id).await {
        Ok(_) => (
            StatusCode::OK,
            Json(BlogSaveResponse {
                success: true,
                id: Some(id),
            }),
        ),
        Err(e) => {
            tracing::error!("Failed to delete blog post {}: {}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(BlogSaveResponse {
                    success: false,
                    id: Some(id),
                }),
            )
        }
    }
}
