//! Cross-origin policy.

use tower_http::cors::{Any, CorsLayer};

/// Permits every origin, method and header.
///
/// Only suitable for local use or behind a gateway that enforces its own
/// policy. Credentialed requests are not allowed.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
