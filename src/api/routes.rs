//! API route configuration.

use crate::api::handlers::{health_handler, process_article_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes. None require authentication.
///
/// # Endpoints
///
/// - `POST /process-article` - Relay an article request to the webhook
/// - `GET  /health`          - Liveness probe
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/process-article", post(process_article_handler))
        .route("/health", get(health_handler))
}
