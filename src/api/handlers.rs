//! API Handlers
//!
//! HTTP/JSON gateway handlers, each binding a request onto one cache
//! service call.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    Json,
};

use crate::cache::CacheStore;
use crate::error::{CacheError, Result};
use crate::models::{
    DeleteRequest, DeleteResponse, GetRequest, GetResponse, HealthResponse, PutRequest,
    PutResponse,
};
use crate::service::CacheService;

/// Application state shared across all handlers.
///
/// Wraps the cache service, whose clones all share one store.
#[derive(Clone)]
pub struct AppState {
    /// Service adapter over the shared cache store
    pub service: CacheService,
}

impl AppState {
    /// Creates a new AppState owning the given cache store.
    pub fn new(cache: CacheStore) -> Self {
        Self::from_service(CacheService::new(Arc::new(cache)))
    }

    /// Creates a new AppState around an existing service.
    pub fn from_service(service: CacheService) -> Self {
        Self { service }
    }
}

fn bind_key(key: std::result::Result<Path<String>, PathRejection>) -> Result<String> {
    key.map(|Path(key)| key)
        .map_err(|rejection| CacheError::InvalidArgument(rejection.body_text()))
}

/// Handler for GET /cachely/v1/objects/:key
pub async fn get_handler(
    State(state): State<AppState>,
    key: std::result::Result<Path<String>, PathRejection>,
) -> Result<Json<GetResponse>> {
    let key = bind_key(key)?;
    let response = state.service.get(GetRequest::new(key))?;

    Ok(Json(response))
}

/// Binds a Put body to its request message.
///
/// The body is decoded as JSON whatever its content type. A body holding
/// only whitespace binds to the default (empty) request.
pub fn bind_put_body(body: &[u8]) -> Result<PutRequest> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(PutRequest::default());
    }

    serde_json::from_slice(body).map_err(|e| CacheError::InvalidArgument(e.to_string()))
}

/// Handler for POST /cachely/v1/objects
///
/// The whole JSON body binds to the Put request.
pub async fn put_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PutResponse>> {
    let req = bind_put_body(&body)?;
    let response = state.service.put(req)?;

    Ok(Json(response))
}

/// Handler for DELETE /cachely/v1/objects/:key
pub async fn delete_handler(
    State(state): State<AppState>,
    key: std::result::Result<Path<String>, PathRejection>,
) -> Result<Json<DeleteResponse>> {
    let key = bind_key(key)?;
    let response = state.service.delete(DeleteRequest::new(key))?;

    Ok(Json(response))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
