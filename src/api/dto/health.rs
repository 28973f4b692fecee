//! DTOs for health check endpoint.

use serde::Serialize;

/// Liveness probe response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}
