use super::client::check_catalog;
use super::types::CheckRequest;
use crate::catalog::handlers::SONG_LIST_KEY;
use crate::catalog::parser::parse_song_list;
use crate::catalog::types::SongListDoc;
use crate::config::Config;
use crate::store::Collection;
use axum::http::StatusCode;
use axum::{Extension, Json};
use rand::Rng;
use serde_json::json;
use std::sync::Arc;

/// `POST /api/check`: asks the external AI search whether the sheet-music
/// catalog covers the queried song. Upstream failure maps to 502; the search
/// path never depends on this endpoint.
pub async fn handle_check(
    Extension(client): Extension<reqwest::Client>,
    Extension(config): Extension<Arc<Config>>,
    Json(req): Json<CheckRequest>,
) -> (StatusCode, Json<serde_json::Value>) {
    let query = req.query.trim();
    if query.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Query is required" })),
        );
    }

    match check_catalog(&client, &config, query).await {
        Ok(check) => (StatusCode::OK, Json(json!(check))),
        Err(e) => {
            tracing::error!("Availability check failed for {:?}: {}", query, e);
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": "Availability check failed" })),
            )
        }
    }
}

/// `GET /api/suggest`: one uniformly random song from the catalog, for the
/// "today's pick" modal. 404 when the catalog is empty.
pub async fn handle_suggest(
    Extension(songs): Extension<Arc<Collection<SongListDoc>>>,
) -> (StatusCode, Json<serde_json::Value>) {
    let catalog = songs
        .get(SONG_LIST_KEY)
        .map(|doc| parse_song_list(&doc.list))
        .unwrap_or_default();

    if catalog.is_empty() {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Song list is empty" })),
        );
    }

    let index = rand::thread_rng().gen_range(0..catalog.len());
    (StatusCode::OK, Json(json!(catalog[index])))
}
