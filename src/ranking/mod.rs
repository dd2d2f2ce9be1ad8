//! Ranking Module
//!
//! Popularity leaderboards built from two counter collections: searches that
//! matched a catalog song (keyed by song title) and free-text requests for
//! songs outside the repertoire (keyed by the requested term).
//!
//! The write side is a read-then-increment over the document store. It is
//! deliberately non-atomic: counts are a popularity signal, so a lost or
//! doubled increment under concurrent writers is accepted.
//!
//! ## Submodules
//! - **`aggregator`**: Pure transforms from a count snapshot to an ordered
//!   leaderboard.
//! - **`handlers`**: Counter endpoints and the event recording used by the
//!   search path.
//! - **`types`**: Leaderboard rows and persisted counter documents.

pub mod aggregator;
pub mod handlers;
pub mod types;
