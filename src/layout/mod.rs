//! Layout Module
//!
//! Site layout and theme configuration: the header texts, the banner blocks
//! and the color theme the frontend renders. Stored as a single document and
//! replaced wholesale on admin save; a missing document falls back to the
//! built-in defaults.

pub mod handlers;
pub mod types;

#[cfg(test)]
mod tests;
