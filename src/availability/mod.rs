//! Availability Module
//!
//! When a song is not in the repertoire, the frontend offers two fallbacks:
//! a link into the external sheet-music catalog, and an AI-backed check of
//! whether the song is covered by the catalog's subscription plan. This
//! module builds the former and proxies the latter, classifying the AI's
//! free-text answer into a structured verdict.
//!
//! Also hosts the random song suggestion endpoint ("today's pick").
//!
//! ## Submodules
//! - **`client`**: External call, verdict parsing and URL construction.
//! - **`handlers`**: The check and suggest HTTP endpoints.
//! - **`types`**: Verdicts and request/response DTOs.

pub mod client;
pub mod handlers;
pub mod types;
