//! Rank Aggregation
//!
//! Pure transforms from an already-fetched count snapshot to an ordered
//! leaderboard. No I/O happens here; handlers pass in whatever the store
//! returned.
//!
//! Ordering is count-descending with ties broken lexicographically by key.
//! The tie-break is an explicit choice: the store iterates its documents in
//! unspecified order, and a leaderboard that reshuffles equal counts between
//! fetches reads as broken.

use super::types::{RankEntry, RequestRankEntry};
use crate::catalog::types::Song;

/// Builds the searched-songs leaderboard from per-title counts.
///
/// The artist of each entry is taken from the first song in the collection
/// whose title equals the counted key; a title absent from the current
/// catalog resolves to an empty artist (the store may hold counts for songs
/// that have since been removed).
pub fn build_ranking(counts: &[(String, u64)], songs: &[Song], limit: usize) -> Vec<RankEntry> {
    let mut entries: Vec<RankEntry> = counts
        .iter()
        .map(|(title, count)| RankEntry {
            id: title.clone(),
            count: *count,
            artist: songs
                .iter()
                .find(|song| song.title == *title)
                .map(|song| song.artist.clone())
                .unwrap_or_default(),
        })
        .collect();

    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.id.cmp(&b.id)));
    entries.truncate(limit);
    entries
}

/// Builds the requested-terms leaderboard. Same ordering, no artist lookup.
pub fn build_request_ranking(counts: &[(String, u64)], limit: usize) -> Vec<RequestRankEntry> {
    let mut entries: Vec<RequestRankEntry> = counts
        .iter()
        .map(|(term, count)| RequestRankEntry {
            id: term.clone(),
            count: *count,
        })
        .collect();

    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.id.cmp(&b.id)));
    entries.truncate(limit);
    entries
}
