//! Bounded-retry webhook delivery.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use super::backoff::BackoffSchedule;
use crate::domain::delivery::{Deliverer, DeliveryOutcome, Sleeper, WebhookTransport};
use crate::domain::entities::DeliveryPayload;

/// Delivers payloads by retrying a [`WebhookTransport`] on a fixed
/// [`BackoffSchedule`].
///
/// # State Machine
///
/// ```text
/// Pending -> Attempting(1) -> Succeeded
///                          -> Attempting(2) -> ... -> Attempting(5) -> Succeeded
///                                                                   -> Exhausted
/// ```
///
/// Attempts run strictly one after another. Between a failed attempt and the
/// next one the loop waits through the injected [`Sleeper`], so many
/// deliveries can be waiting at once without holding a thread each.
pub struct RetryingDeliverer<T: WebhookTransport, S: Sleeper> {
    transport: Arc<T>,
    sleeper: Arc<S>,
    schedule: BackoffSchedule,
}

impl<T: WebhookTransport, S: Sleeper> RetryingDeliverer<T, S> {
    pub fn new(transport: Arc<T>, sleeper: Arc<S>, schedule: BackoffSchedule) -> Self {
        Self {
            transport,
            sleeper,
            schedule,
        }
    }
}

#[async_trait]
impl<T: WebhookTransport, S: Sleeper> Deliverer for RetryingDeliverer<T, S> {
    async fn deliver(&self, payload: &DeliveryPayload) -> DeliveryOutcome {
        let max_attempts = self.schedule.max_attempts();

        for attempt in 1..=max_attempts {
            match self.transport.send(payload).await {
                Ok(()) => {
                    info!(
                        session_id = %payload.session_id,
                        attempt,
                        "Payload delivered to webhook"
                    );
                    return DeliveryOutcome::Delivered { attempts: attempt };
                }
                Err(e) => {
                    warn!(
                        session_id = %payload.session_id,
                        attempt,
                        max_attempts,
                        "Delivery attempt failed: {}",
                        e
                    );
                }
            }

            if let Some(delay) = self.schedule.delay_after(attempt) {
                debug!(
                    session_id = %payload.session_id,
                    delay_secs = delay.as_secs_f64(),
                    "Retrying delivery after backoff"
                );
                self.sleeper.sleep(delay).await;
            }
        }

        error!(
            session_id = %payload.session_id,
            attempts = max_attempts,
            "Giving up on webhook delivery"
        );
        DeliveryOutcome::Exhausted {
            attempts: max_attempts,
        }
    }
}
