//! Cache Module
//!
//! Provides the in-memory key-value store with create-once / explicit-delete
//! semantics.

mod store;


// Re-export public types
pub use store::CacheStore;

/// Payload stored for a key.
///
/// Reference counted and immutable, so readers share the stored bytes
/// without copying them.
pub type Payload = bytes::Bytes;
