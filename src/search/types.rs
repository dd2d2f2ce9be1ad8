//! Search Data Types
//!
//! The outcome shape handed to the presentation layer. Serialized names match
//! the frontend wire format.

use crate::catalog::types::Song;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchStatus {
    Found,
    Related,
    NotFound,
}

/// Result of one search over the catalog. `songs` keeps collection order for
/// `found` outcomes and is truncated for `related` ones; `search_term` is the
/// trimmed original-case query, used for display and for building the
/// external sheet-catalog URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOutcome {
    pub status: SearchStatus,
    pub songs: Vec<Song>,
    pub search_term: String,
}
