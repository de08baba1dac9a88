//! Cachely - a create-once in-memory cache service
//!
//! A key may only be written while absent and only an explicit delete frees
//! it again. The store is exposed through an RPC-style service adapter and an
//! HTTP/JSON gateway.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod service;

pub use api::AppState;
pub use cache::{CacheStore, Payload};
pub use config::Config;
pub use error::{CacheError, Code};
pub use service::CacheService;
