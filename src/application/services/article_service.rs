//! Article processing: validation, session assignment and delivery.

use serde_json::json;
use std::sync::Arc;
use tokio_util::task::TaskTracker;
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

use crate::domain::delivery::{Deliverer, DeliveryOutcome};
use crate::domain::entities::{ArticleRequest, DeliveryPayload};
use crate::error::AppError;

/// Returned to the client once the webhook has accepted a payload.
pub const DELIVERED_MESSAGE: &str = "Data successfully sent to the automation processing queue.";

/// Returned to the client once every scheduled attempt has failed.
pub const UNREACHABLE_MESSAGE: &str =
    "Failed to reach the automation server after several attempts.";

/// A request that was accepted by the webhook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessedArticle {
    pub session_id: Uuid,
    pub attempts: u32,
}

/// Service that turns raw article requests into webhook deliveries.
///
/// Holds no per-request state; concurrent calls each build their own payload
/// and run their own delivery sequence. Every sequence is tracked so shutdown
/// can wait for the ones whose caller has already gone away.
pub struct ArticleService {
    deliverer: Arc<dyn Deliverer>,
    deliveries: TaskTracker,
}

impl ArticleService {
    pub fn new(deliverer: Arc<dyn Deliverer>) -> Self {
        Self {
            deliverer,
            deliveries: TaskTracker::new(),
        }
    }

    /// Closes the tracker and waits for every running delivery sequence.
    pub async fn drain(&self) {
        self.deliveries.close();
        if !self.deliveries.is_empty() {
            info!(
                pending = self.deliveries.len(),
                "Waiting for in-flight deliveries"
            );
        }
        self.deliveries.wait().await;
    }

    /// Validates the request, assigns it a session id and relays it.
    ///
    /// The delivery sequence runs on its own task and keeps going even if the
    /// caller's future is dropped (e.g. on client disconnect).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed email or URL. No
    /// delivery is attempted in that case.
    ///
    /// Returns [`AppError::UpstreamUnavailable`] when the webhook never
    /// accepted the payload.
    ///
    /// Returns [`AppError::Internal`] if the delivery task panicked.
    pub async fn process_article(
        &self,
        email: String,
        article_url: String,
    ) -> Result<ProcessedArticle, AppError> {
        let request = ArticleRequest::new(email, &article_url)?;
        let payload = DeliveryPayload::for_request(&request);
        let session_id = payload.session_id;

        let deliverer = Arc::clone(&self.deliverer);
        let span = info_span!("deliver_article", %session_id);
        let delivery = async move { deliverer.deliver(&payload).await }.instrument(span);
        let outcome = self
            .deliveries
            .spawn(delivery)
            .await
            .map_err(|e| {
                AppError::internal(
                    "Delivery task failed",
                    json!({ "session_id": session_id, "reason": e.to_string() }),
                )
            })?;

        match outcome {
            DeliveryOutcome::Delivered { attempts } => Ok(ProcessedArticle {
                session_id,
                attempts,
            }),
            DeliveryOutcome::Exhausted { attempts } => Err(AppError::upstream_unavailable(
                UNREACHABLE_MESSAGE,
                json!({ "session_id": session_id, "attempts": attempts }),
            )),
        }
    }
}
