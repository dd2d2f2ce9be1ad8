use super::aggregator::{build_ranking, build_request_ranking};
use super::types::{
    LogEventRequest, LogEventResponse, RankEntry, RequestCountDoc, RequestRankEntry,
    SearchCountDoc, RANKING_LIMIT,
};
use crate::catalog::handlers::SONG_LIST_KEY;
use crate::catalog::parser::parse_song_list;
use crate::catalog::types::SongListDoc;
use crate::search::normalize::normalize_for_search;
use crate::store::Collection;
use axum::{Extension, Json};
use std::sync::Arc;

/// Increments the search counter of every distinct catalog title matched by
/// `term`. A term that matches nothing logs nothing.
///
/// This is the fire-and-forget write side: failures are logged and swallowed,
/// never surfaced to the searching user. The read-then-increment is not
/// atomic; duplicate or lost increments under concurrent writers are accepted.
pub async fn record_search_event(
    songs: Arc<Collection<SongListDoc>>,
    search_counts: Arc<Collection<SearchCountDoc>>,
    term: String,
) {
    let normalized = normalize_for_search(&term);
    if normalized.is_empty() {
        return;
    }

    let Some(doc) = songs.get(SONG_LIST_KEY) else {
        return;
    };
    let catalog = parse_song_list(&doc.list);

    let mut matched_titles: Vec<&str> = Vec::new();
    for song in &catalog {
        if matched_titles.contains(&song.title.as_str()) {
            continue;
        }
        if normalize_for_search(&song.title).contains(&normalized)
            || normalize_for_search(&song.artist).contains(&normalized)
        {
            matched_titles.push(&song.title);
        }
    }

    for title in matched_titles {
        let next = search_counts.get(title).map(|d| d.count).unwrap_or(0) + 1;
        if let Err(e) = search_counts.put(title, SearchCountDoc { count: next }).await {
            tracing::warn!("Failed to log search count for {:?}: {}", title, e);
        }
    }
}

/// Increments the request counter for a free-text term.
pub async fn record_request_event(
    request_counts: Arc<Collection<RequestCountDoc>>,
    term: String,
) {
    let term = term.trim();
    if term.is_empty() {
        return;
    }

    let next = request_counts.get(term).map(|d| d.count).unwrap_or(0) + 1;
    if let Err(e) = request_counts
        .put(term, RequestCountDoc { count: next })
        .await
    {
        tracing::warn!("Failed to log request count for {:?}: {}", term, e);
    }
}

/// `POST /api/log-search`: logs a search term against the catalog counters.
///
/// Always answers `{ success: true }`: logging is a popularity signal and must
/// never surface an error to the visitor.
pub async fn handle_log_search(
    Extension(songs): Extension<Arc<Collection<SongListDoc>>>,
    Extension(search_counts): Extension<Arc<Collection<SearchCountDoc>>>,
    Json(req): Json<LogEventRequest>,
) -> Json<LogEventResponse> {
    record_search_event(songs, search_counts, req.term).await;
    Json(LogEventResponse { success: true })
}

/// `POST /api/log-request`: logs a song request for a term outside the
/// repertoire. Same always-success contract as search logging.
pub async fn handle_log_request(
    Extension(request_counts): Extension<Arc<Collection<RequestCountDoc>>>,
    Json(req): Json<LogEventRequest>,
) -> Json<LogEventResponse> {
    record_request_event(request_counts, req.term).await;
    Json(LogEventResponse { success: true })
}

/// `GET /api/get-ranking`: the searched-songs leaderboard, top 100.
pub async fn handle_get_ranking(
    Extension(songs): Extension<Arc<Collection<SongListDoc>>>,
    Extension(search_counts): Extension<Arc<Collection<SearchCountDoc>>>,
) -> Json<Vec<RankEntry>> {
    let catalog = songs
        .get(SONG_LIST_KEY)
        .map(|doc| parse_song_list(&doc.list))
        .unwrap_or_default();
    let counts: Vec<(String, u64)> = search_counts
        .entries()
        .into_iter()
        .map(|(title, doc)| (title, doc.count))
        .collect();

    Json(build_ranking(&counts, &catalog, RANKING_LIMIT))
}

/// `GET /api/request-ranking`: the requested-terms leaderboard, top 100.
pub async fn handle_get_request_ranking(
    Extension(request_counts): Extension<Arc<Collection<RequestCountDoc>>>,
) -> Json<Vec<RequestRankEntry>> {
    let counts: Vec<(String, u64)> = request_counts
        .entries()
        .into_iter()
        .map(|(term, doc)| (term, doc.count))
        .collect();

    Json(build_request_ranking(&counts, RANKING_LIMIT))
}
