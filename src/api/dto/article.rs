//! DTOs for the article processing endpoint.
//!
//! The request is deserialized as-is; field checks happen when the service
//! builds an [`crate::domain::entities::ArticleRequest`].

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to relay an article to the automation webhook.
#[derive(Debug, Deserialize)]
pub struct ProcessArticleRequest {
    /// Recipient of the processed article.
    pub email: String,

    /// Absolute HTTP(S) link to the article.
    pub article_url: String,
}

/// Confirmation that the webhook accepted the request.
#[derive(Debug, Serialize)]
pub struct ProcessArticleResponse {
    pub status: String,
    pub session_id: Uuid,
    pub message: String,
}
