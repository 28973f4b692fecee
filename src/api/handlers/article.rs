//! Handler for article processing endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::api::dto::article::{ProcessArticleRequest, ProcessArticleResponse};
use crate::application::services::article_service::DELIVERED_MESSAGE;
use crate::error::AppError;
use crate::state::AppState;

/// Relays an article request to the automation webhook.
///
/// # Endpoint
///
/// `POST /process-article`
///
/// # Request Body
///
/// ```json
/// {
///   "email": "reader@example.com",
///   "article_url": "https://example.com/article"
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "status": "success",
///   "session_id": "3f2b7c1e-8d4a-4f6b-9c2e-1a5d7e9f0b3c",
///   "message": "Data successfully sent to the automation processing queue."
/// }
/// ```
///
/// # Response Codes
///
/// - **200 OK**: Webhook accepted the payload
/// - **422 Unprocessable Entity**: Malformed body, email or URL
/// - **502 Bad Gateway**: Webhook unreachable after every retry
///
/// The response is only produced once delivery finishes, which can take up to
/// about a minute when the webhook is down.
pub async fn process_article_handler(
    State(state): State<AppState>,
    payload: Result<Json<ProcessArticleRequest>, JsonRejection>,
) -> Result<Json<ProcessArticleResponse>, AppError> {
    let Json(payload) = payload?;

    let processed = state
        .article_service
        .process_article(payload.email, payload.article_url)
        .await?;

    Ok(Json(ProcessArticleResponse {
        status: "success".to_string(),
        session_id: processed.session_id,
        message: DELIVERED_MESSAGE.to_string(),
    }))
}
