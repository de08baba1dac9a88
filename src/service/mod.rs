//! Service Module
//!
//! The RPC-facing adapter that exposes the cache store's Get, Put and Delete
//! operations to remote callers.

mod cache_service;

pub use cache_service::CacheService;
