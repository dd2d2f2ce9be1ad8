//! Catalog Data Types
//!
//! The `Song` record and the persisted song list document. Field names follow
//! the frontend wire format (camelCase, lowercase status).

use serde::{Deserialize, Serialize};

/// Performance readiness of a song. `Practicing` songs are listed but not
/// yet accepted as requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SongStatus {
    #[default]
    Playable,
    Practicing,
}

/// One catalog entry. A record only exists with a non-empty trimmed title and
/// artist; identity for deduplication purposes is the (title, artist) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub status: SongStatus,
}

/// The persisted song list document: the raw delimited blob, stored under the
/// fixed key [`handlers::SONG_LIST_KEY`](super::handlers::SONG_LIST_KEY).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SongListDoc {
    pub list: String,
}
