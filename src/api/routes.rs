//! API Routes
//!
//! Configures the Axum router for the cache gateway.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{delete_handler, get_handler, health_handler, put_handler, AppState};

/// Prefix shared by all object routes.
pub const OBJECTS_PATH: &str = "/cachely/v1/objects";

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /cachely/v1/objects/:key` - Get
/// - `POST /cachely/v1/objects` - Put
/// - `DELETE /cachely/v1/objects/:key` - Delete
/// - `GET /health` - Health check endpoint
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(OBJECTS_PATH, post(put_handler))
        .route(
            &format!("{}/:key", OBJECTS_PATH),
            get(get_handler).delete(delete_handler),
        )
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
