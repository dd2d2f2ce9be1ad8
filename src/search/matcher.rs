//! Catalog Matcher
//!
//! The core search logic: a pure, total function from a query string and a
//! song collection to a [`SearchOutcome`]. No I/O, no hidden state.

use super::normalize::normalize_for_search;
use super::types::{SearchOutcome, SearchStatus};
use crate::catalog::types::Song;
use std::collections::HashSet;

/// Maximum number of songs surfaced by the related-by-artist fallback.
pub const RELATED_LIMIT: usize = 5;

/// Searches the catalog for `term`.
///
/// Primary match: case-folded substring containment of the term in a song's
/// title or artist; hits are returned in collection order. When nothing hits,
/// the fallback collects every artist whose name appears inside the query
/// (handles "artist + misspelled title" queries), gathers that artist's
/// songs, deduplicates by (title, artist) and truncates to [`RELATED_LIMIT`].
/// An empty or whitespace-only term is "no search": `notFound` with no songs.
pub fn search_songs(term: &str, songs: &[Song]) -> SearchOutcome {
    let search_term = term.trim().to_string();
    let normalized = normalize_for_search(&search_term);

    if normalized.is_empty() {
        return SearchOutcome {
            status: SearchStatus::NotFound,
            songs: Vec::new(),
            search_term,
        };
    }

    let matches: Vec<Song> = songs
        .iter()
        .filter(|song| {
            normalize_for_search(&song.title).contains(&normalized)
                || normalize_for_search(&song.artist).contains(&normalized)
        })
        .cloned()
        .collect();

    if !matches.is_empty() {
        return SearchOutcome {
            status: SearchStatus::Found,
            songs: matches,
            search_term,
        };
    }

    let related = related_by_artist(&normalized, songs);
    if !related.is_empty() {
        return SearchOutcome {
            status: SearchStatus::Related,
            songs: related,
            search_term,
        };
    }

    SearchOutcome {
        status: SearchStatus::NotFound,
        songs: Vec::new(),
        search_term,
    }
}

/// Collects songs by every artist whose normalized name is a substring of the
/// normalized query, deduplicated by (title, artist) in collection order.
fn related_by_artist(normalized_term: &str, songs: &[Song]) -> Vec<Song> {
    let mut mentioned: Vec<&str> = Vec::new();
    for song in songs {
        if song.artist.is_empty() || mentioned.contains(&song.artist.as_str()) {
            continue;
        }
        if normalized_term.contains(&normalize_for_search(&song.artist)) {
            mentioned.push(&song.artist);
        }
    }
    if mentioned.is_empty() {
        return Vec::new();
    }

    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut related = Vec::new();
    for song in songs {
        if !mentioned.iter().any(|artist| *artist == song.artist) {
            continue;
        }
        if seen.insert((song.title.clone(), song.artist.clone())) {
            related.push(song.clone());
            if related.len() == RELATED_LIMIT {
                break;
            }
        }
    }
    related
}
