//! Request messages for the cache service
//!
//! Defines the inputs of the Get, Put and Delete calls.

use serde::{Deserialize, Serialize};

use crate::cache::Payload;

/// Input of the Get call (GET /cachely/v1/objects/:key)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetRequest {
    /// The key to look up
    pub key: String,
}

impl GetRequest {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// Input of the Put call (POST /cachely/v1/objects)
///
/// In JSON, `value` is a base64 string. Both fields fall back to their
/// empty defaults when omitted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PutRequest {
    /// The key to populate
    #[serde(default)]
    pub key: String,
    /// The payload to store
    #[serde(default, with = "super::payload_json")]
    pub value: Payload,
}

impl PutRequest {
    pub fn new(key: impl Into<String>, value: impl Into<Payload>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Input of the Delete call (DELETE /cachely/v1/objects/:key)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteRequest {
    /// The key to remove
    pub key: String,
}

impl DeleteRequest {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}
