//! Client-facing error type and its JSON rendering.
//!
//! Every error renders as:
//!
//! ```json
//! { "error": { "code": "validation_error", "message": "...", "details": {} } }
//! ```

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::domain::entities::ArticleRequestError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed input. Detected before any network activity, never retried.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// The automation webhook could not be reached after every scheduled attempt.
    #[error("{message}")]
    UpstreamUnavailable { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn validation(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn upstream_unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::UpstreamUnavailable {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::UpstreamUnavailable { .. } => StatusCode::BAD_GATEWAY,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error_info(self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::UpstreamUnavailable { message, details } => {
                ("upstream_unavailable", message, details)
            }
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ArticleRequestError> for AppError {
    fn from(error: ArticleRequestError) -> Self {
        let mut fields = Map::new();
        fields.insert(error.field().to_string(), json!([error.to_string()]));

        AppError::validation("Validation failed", Value::Object(fields))
    }
}

/// Unparseable or structurally wrong JSON bodies are validation failures too.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::validation(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}
