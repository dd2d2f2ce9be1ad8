//! Blog Module
//!
//! A small CRUD API for announcement posts, edited from the admin surface.
//! Visitors only ever see published posts, newest first; the admin listing
//! includes drafts.
//!
//! ## Submodules
//! - **`handlers`**: HTTP endpoints (list/get, create/update, delete).
//! - **`types`**: The post document and its wire format.

pub mod handlers;
pub mod types;
