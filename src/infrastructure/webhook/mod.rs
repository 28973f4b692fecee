//! Outbound webhook integration.
//!
//! - [`HttpWebhookTransport`] - Production transport built on reqwest
//! - [`TokioSleeper`] - Backoff waits on the tokio timer

mod http_transport;
mod sleeper;

pub use http_transport::HttpWebhookTransport;
pub use sleeper::TokioSleeper;
