//! Response messages for the cache service
//!
//! Defines the outputs of the Get, Put and Delete calls plus the bodies the
//! HTTP gateway adds on its own.

use serde::{Deserialize, Serialize};

use crate::cache::Payload;
use crate::error::Code;

/// Output of the Get call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetResponse {
    /// The requested key
    pub key: String,
    /// The stored payload, base64 in JSON
    #[serde(with = "super::payload_json")]
    pub value: Payload,
}

impl GetResponse {
    pub fn new(key: impl Into<String>, value: Payload) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Output of the Put call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PutResponse {
    /// The key that was populated
    pub key: String,
}

impl PutResponse {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// Output of the Delete call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// The key that was removed
    pub key: String,
}

impl DeleteResponse {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error body returned by the gateway for every failed call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message, duplicated for older gateway clients
    pub error: String,
    /// Numeric status code
    pub code: i32,
    /// Error message describing what went wrong
    pub message: String,
    /// Always empty; kept for gateway client compatibility
    pub details: Vec<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            error: message.clone(),
            code: code.as_i32(),
            message,
            details: Vec::new(),
        }
    }
}
