//! Piano Request Checker Backend
//!
//! This library crate defines the core modules behind the request checker web
//! application. It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The service is composed of loosely coupled subsystems:
//!
//! - **`catalog`**: The song list itself. Parses the delimited text blob into
//!   structured records, encodes it back for persistence, and exposes the
//!   load/save HTTP endpoints used by the admin surface.
//! - **`search`**: Query matching against the catalog. Normalizes terms,
//!   computes `found` / `related` / `notFound` outcomes, and serves the
//!   public search endpoint.
//! - **`ranking`**: Popularity leaderboards. Aggregates search and request
//!   counters into ordered rankings and owns the counter write side.
//! - **`blog`**: A small CRUD API for announcement posts.
//! - **`layout`**: Site layout/theme configuration (header, banners, colors).
//! - **`availability`**: Proxy to the external AI sheet-music search, plus the
//!   random song suggestion endpoint.
//! - **`store`**: The persistence layer. JSON-file-backed document collections
//!   standing in for the hosted document database.

pub mod admin;
pub mod availability;
pub mod blog;
pub mod catalog;
pub mod config;
pub mod layout;
pub mod ranking;
pub mod search;
pub mod store;
