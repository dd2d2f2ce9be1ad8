//! Search Module
//!
//! Query matching against the song catalog. This is the piece the whole
//! application hangs off: a visitor types a song or artist name and gets back
//! one of three outcomes: the song is in the repertoire (`found`), the exact
//! song is not but the named artist has other songs in it (`related`), or
//! nothing matched (`notFound`).
//!
//! ## Submodules
//! - **`matcher`**: The outcome computation itself, a pure total function.
//! - **`normalize`**: Term normalization (case folding plus full-width to
//!   half-width folding) applied to both queries and catalog fields.
//! - **`handlers`**: The public search HTTP endpoint.
//! - **`types`**: Outcome types shared with the API layer.

pub mod handlers;
pub mod matcher;
pub mod normalize;
pub mod types;

#[cfg(test)]
mod tests;
