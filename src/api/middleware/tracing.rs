//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// # Logging Behavior
///
/// **On Request:**
/// - Creates a span at `INFO` level with method, URI and HTTP version
///
/// **On Response:**
/// - Logs at `INFO` level with status code and latency in milliseconds
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST uri=/process-article version=HTTP/1.1}: finished processing request latency=214 ms status=200
/// INFO request{method=POST uri=/process-article version=HTTP/1.1}: finished processing request latency=15006 ms status=502
/// ```
///
/// Delivery log lines emitted while the request is in flight carry the
/// request span, so attempts can be matched to their HTTP request.
pub fn layer()
-> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
