//! API Module
//!
//! HTTP/JSON gateway in front of the cache service.
//!
//! # Endpoints
//! - `GET /cachely/v1/objects/:key` - Retrieve the payload stored at a key
//! - `POST /cachely/v1/objects` - Store a payload at an absent key
//! - `DELETE /cachely/v1/objects/:key` - Delete a key
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::{create_router, OBJECTS_PATH};
