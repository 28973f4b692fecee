//! Delivery contracts between the request handler and the webhook.
//!
//! Three capabilities are modelled as traits so each can be swapped out in
//! tests:
//!
//! - [`WebhookTransport`] - performs one outbound attempt
//! - [`Sleeper`] - waits between attempts
//! - [`Deliverer`] - delivers one payload under a retry policy
//!
//! # Implementations
//!
//! - [`crate::infrastructure::webhook::HttpWebhookTransport`] - reqwest-backed transport
//! - [`crate::infrastructure::webhook::TokioSleeper`] - `tokio::time::sleep`
//! - [`crate::application::services::RetryingDeliverer`] - fixed-schedule retry loop
//! - Test mocks available with `cfg(test)`

use async_trait::async_trait;
use std::time::Duration;

use crate::domain::entities::DeliveryPayload;

/// Why a single delivery attempt failed.
///
/// Never surfaced to clients; the retry loop only logs it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttemptError {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("destination responded with HTTP {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Request(String),
}

/// Terminal result of a delivery sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The destination acknowledged with a 2xx on attempt `attempts`.
    Delivered { attempts: u32 },
    /// Every scheduled attempt failed.
    Exhausted { attempts: u32 },
}

/// Sends one payload to the fixed destination, exactly once.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WebhookTransport: Send + Sync {
    /// Performs a single attempt.
    ///
    /// # Errors
    ///
    /// Returns an [`AttemptError`] on transport failure, timeout, or a non-2xx
    /// response.
    async fn send(&self, payload: &DeliveryPayload) -> Result<(), AttemptError>;
}

/// Suspends the current task.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Delivers one payload to one destination under a bounded retry policy.
///
/// Failure is a normal outcome, so this never returns an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Deliverer: Send + Sync {
    async fn deliver(&self, payload: &DeliveryPayload) -> DeliveryOutcome;
}
