//! Outbound webhook body.

use serde::Serialize;
use uuid::Uuid;

use super::ArticleRequest;

/// JSON body posted to the automation webhook.
///
/// Serializes as `{"email": ..., "article_url": ..., "session_id": ...}` with
/// the session id in hyphenated UUID form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryPayload {
    pub email: String,
    pub article_url: String,
    /// Random v4 UUID tagging this request for downstream correlation.
    pub session_id: Uuid,
}

impl DeliveryPayload {
    /// Builds the payload for `request` under a freshly generated session id.
    pub fn for_request(request: &ArticleRequest) -> Self {
        Self {
            email: request.email().to_string(),
            article_url: request.article_url().to_string(),
            session_id: Uuid::new_v4(),
        }
    }
}
