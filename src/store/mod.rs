//! Document Store Module
//!
//! The persistence layer of the service. Each named collection is an
//! in-memory map snapshotted to a JSON file in the data directory, standing
//! in for a hosted document database.
//!
//! ## Responsibilities
//! - **`collection`**: The `Collection<V>` type, a string-keyed map of serde
//!   documents with load-on-open and persist-on-write semantics.
//!
//! Persistence failures never take the service down: a collection that cannot
//! be read starts empty, and a failed write leaves the in-memory state
//! authoritative until the next successful snapshot.

pub mod collection;

pub use collection::Collection;

#[cfg(test)]
mod tests;
