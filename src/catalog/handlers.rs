use super::types::SongListDoc;
use crate::admin;
use crate::config::Config;
use crate::store::Collection;
use axum::http::{HeaderMap, StatusCode};
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Key of the single song list document inside the `songlist` collection.
pub const SONG_LIST_KEY: &str = "default";

/// Seed list written on first read when no song list document exists yet.
pub const DEFAULT_SONG_LIST: &str = "夜に駆ける,YOASOBI\nPretender,Official髭男dism\nLemon,米津玄師\n紅蓮華,LiSA\nドライフラワー,優里\n白日,King Gnu\nマリーゴールド,あいみょん\n猫,DISH//\nうっせぇわ,Ado\n廻廻奇譚,Eve\n炎,LiSA\nCry Baby,Official髭男dism\nアイドル,YOASOBI\nKICK BACK,米津玄師\n新時代,Ado\n旅路,藤井風\n何なんw,藤井風\ngrace,藤井風\nきらり,藤井風";

#[derive(Deserialize)]
pub struct SaveSongsRequest {
    pub list: String,
}

#[derive(Serialize)]
pub struct SaveSongsResponse {
    pub success: bool,
}

/// `GET /api/songs`: returns the raw song list blob, seeding the store with
/// the default list when the document is missing.
pub async fn handle_get_songs(
    Extension(songs): Extension<Arc<Collection<SongListDoc>>>,
) -> (StatusCode, Json<SongListDoc>) {
    if let Some(doc) = songs.get(SONG_LIST_KEY) {
        return (StatusCode::OK, Json(doc));
    }

    let doc = SongListDoc {
        list: DEFAULT_SONG_LIST.to_string(),
    };
    if let Err(e) = songs.put(SONG_LIST_KEY, doc.clone()).await {
        // Degraded mode: serve the seed list even if it could not be persisted.
        tracing::error!("Failed to seed song list: {}", e);
    }
    (StatusCode::OK, Json(doc))
}

/// `POST /api/songs`: replaces the song list blob wholesale. Admin only.
pub async fn handle_save_songs(
    Extension(songs): Extension<Arc<Collection<SongListDoc>>>,
    Extension(config): Extension<Arc<Config>>,
    headers: HeaderMap,
    Json(req): Json<SaveSongsRequest>,
) -> (StatusCode, Json<SaveSongsResponse>) {
    if !admin::is_authorized(&config, &headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(SaveSongsResponse { success: false }),
        );
    }

    match songs.put(SONG_LIST_KEY, SongListDoc { list: req.list }).await {
        Ok(_) => (StatusCode::OK, Json(SaveSongsResponse { success: true })),
        Err(e) => {
            tracing::error!("Failed to save song list: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SaveSongsResponse { success: false }),
            )
        }
    }
}
