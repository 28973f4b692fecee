//! reqwest-backed webhook transport.

use async_trait::async_trait;
use std::time::{Duration, Instant};
use tracing::debug;
use url::Url;

use crate::domain::delivery::{AttemptError, WebhookTransport};
use crate::domain::entities::DeliveryPayload;

/// Posts payloads as JSON to one fixed webhook URL.
///
/// The underlying client pools connections and is shared by every request.
#[derive(Debug, Clone)]
pub struct HttpWebhookTransport {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpWebhookTransport {
    /// Builds a transport with a per-attempt `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be configured (e.g. the TLS
    /// backend fails to initialize).
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("article-relay/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl WebhookTransport for HttpWebhookTransport {
    async fn send(&self, payload: &DeliveryPayload) -> Result<(), AttemptError> {
        let started = Instant::now();

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        debug!(
            status = status.as_u16(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Webhook responded"
        );

        if status.is_success() {
            Ok(())
        } else {
            Err(AttemptError::Status(status.as_u16()))
        }
    }
}

fn classify(e: reqwest::Error) -> AttemptError {
    if e.is_timeout() {
        AttemptError::Timeout
    } else if e.is_connect() {
        AttemptError::Connect(e.to_string())
    } else {
        AttemptError::Request(e.to_string())
    }
}
