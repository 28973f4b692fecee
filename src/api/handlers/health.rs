//! Handler for health check endpoint.

use axum::Json;

use crate::api::dto::health::HealthResponse;

/// Liveness probe.
///
/// # Endpoint
///
/// `GET /health`
///
/// Always returns `{"status": "online"}` without contacting the webhook.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "online".to_string(),
    })
}
