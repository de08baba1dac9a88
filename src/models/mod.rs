//! Request and Response models for the cache service
//!
//! This module defines the RPC messages exchanged with the service adapter
//! and their JSON form on the HTTP gateway.

mod payload_json;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{DeleteRequest, GetRequest, PutRequest};
pub use responses::{DeleteResponse, ErrorResponse, GetResponse, HealthResponse, PutResponse};
