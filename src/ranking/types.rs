//! Ranking Data Types
//!
//! Leaderboard rows returned by the API and the counter documents held in the
//! store. Search counts and request counts get distinct document types so the
//! two collections stay distinguishable when injected into handlers.

use serde::{Deserialize, Serialize};

/// Leaderboards are capped at the top 100 entries.
pub const RANKING_LIMIT: usize = 100;

/// One row of the searched-songs leaderboard. `id` is the song title; the
/// artist is resolved from the current catalog at aggregation time and is
/// empty when the counted title is no longer in the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankEntry {
    pub id: String,
    pub count: u64,
    pub artist: String,
}

/// One row of the requested-terms leaderboard. Requested terms are free text
/// and may not correspond to any known song, so there is no artist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestRankEntry {
    pub id: String,
    pub count: u64,
}

/// Persisted per-title search counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchCountDoc {
    pub count: u64,
}

/// Persisted per-term request counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestCountDoc {
    pub count: u64,
}

#[derive(Deserialize)]
pub struct LogEventRequest {
    pub term: String,
}

#[derive(Serialize)]
pub struct LogEventResponse {
    pub success: bool,
}
