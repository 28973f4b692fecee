//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /process-article` - Relay an article request (public)
//! - `GET  /health`          - Liveness probe (public)
//!
//! # Middleware
//!
//! - **CORS** - All origins, methods and headers
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = api::routes::public_routes()
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
