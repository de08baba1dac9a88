//! Error types for the cache service
//!
//! Provides the error taxonomy shared by the store, the service adapter and
//! the HTTP gateway, using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Status Codes ==
/// Externally visible status codes.
///
/// Numbering follows the gRPC canonical codes so gateway clients can reuse
/// their existing status handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum Code {
    InvalidArgument = 3,
    NotFound = 5,
    AlreadyExists = 6,
}

impl Code {
    /// Numeric value carried in error bodies.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// HTTP status the gateway answers with for this code.
    pub fn http_status(self) -> StatusCode {
        match self {
            Code::InvalidArgument => StatusCode::BAD_REQUEST,
            Code::NotFound => StatusCode::NOT_FOUND,
            Code::AlreadyExists => StatusCode::CONFLICT,
        }
    }
}

// == Cache Error Enum ==
/// Unified error type for the cache service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Key has no current entry
    #[error("could not find key {0}")]
    NotFound(String),

    /// Key already holds an entry
    #[error("existing cached item located at {0}")]
    AlreadyExists(String),

    /// Request could not be bound to an RPC message.
    /// Only produced by the gateway layer.
    #[error("{0}")]
    InvalidArgument(String),
}

impl CacheError {
    /// Maps this error onto its external status code.
    pub fn code(&self) -> Code {
        match self {
            CacheError::NotFound(_) => Code::NotFound,
            CacheError::AlreadyExists(_) => Code::AlreadyExists,
            CacheError::InvalidArgument(_) => Code::InvalidArgument,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let code = self.code();
        let body = Json(ErrorResponse::new(code, self.to_string()));

        (code.http_status(), body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache service.
pub type Result<T> = std::result::Result<T, CacheError>;
