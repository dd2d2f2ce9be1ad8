//! Blog Data Types

use serde::{Deserialize, Serialize};

/// One blog post as stored and as served (camelCase on the wire, millisecond
/// timestamps). `created_at` is set once at creation; `updated_at` moves on
/// every save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub is_published: bool,
    pub created_at: u64,
    pub updated_at: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Body accepted by the create/update endpoint. The id may come from the
/// query string, the body, or be generated for new posts.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostInput {
    pub id: Option<String>,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub is_published: bool,
    pub image_url: Option<String>,
}

/// Current system time in milliseconds since the epoch.
pub fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
