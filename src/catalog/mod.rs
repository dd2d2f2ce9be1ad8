//! Song Catalog Module
//!
//! Owns the performer's song list. The list is persisted as a flat delimited
//! text blob (one song per line) and parsed into structured records on every
//! read, so the blob remains the single source of truth and an admin save
//! replaces the whole collection at once.
//!
//! ## Submodules
//! - **`parser`**: Blob-to-records parsing and the inverse encoding.
//! - **`handlers`**: HTTP endpoints for loading and saving the list.
//! - **`types`**: The `Song` record and the persisted document shape.

pub mod handlers;
pub mod parser;
pub mod types;
