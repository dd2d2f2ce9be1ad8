use super::matcher::search_songs;
use super::types::SearchOutcome;
use crate::availability::client::catalog_search_url;
use crate::catalog::handlers::SONG_LIST_KEY;
use crate::catalog::parser::parse_song_list;
use crate::catalog::types::SongListDoc;
use crate::ranking;
use crate::ranking::types::SearchCountDoc;
use crate::store::Collection;
use axum::extract::Query;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: String,
}

#[derive(Serialize)]
pub struct SearchResponse {
    #[serde(flatten)]
    pub outcome: SearchOutcome,
    /// External sheet-music catalog search URL for the same term.
    #[serde(rename = "catalogUrl")]
    pub catalog_url: String,
}

/// `GET /api/search?q=`: runs the matcher over the current catalog snapshot.
///
/// The search term is also logged to the popularity counters as a detached
/// task: logging must never block or fail the search itself.
pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(songs): Extension<Arc<Collection<SongListDoc>>>,
    Extension(search_counts): Extension<Arc<Collection<SearchCountDoc>>>,
) -> Json<SearchResponse> {
    let blob = songs
        .get(SONG_LIST_KEY)
        .map(|doc| doc.list)
        .unwrap_or_default();
    let catalog = parse_song_list(&blob);
    let outcome = search_songs(&params.q, &catalog);

    if !outcome.search_term.is_empty() {
        let term = outcome.search_term.clone();
        let songs = songs.clone();
        tokio::spawn(async move {
            ranking::handlers::record_search_event(songs, search_counts, term).await;
        });
    }

    Json(SearchResponse {
        catalog_url: catalog_search_url(&outcome.search_term),
        outcome,
    })
}
