//! Validated article processing request.

use url::Url;
use validator::ValidateEmail;

use crate::utils::url_validator::{UrlValidationError, parse_http_url};

/// Reasons an [`ArticleRequest`] cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArticleRequestError {
    #[error("Invalid email address")]
    InvalidEmail,

    #[error("{0}")]
    InvalidUrl(#[from] UrlValidationError),
}

impl ArticleRequestError {
    /// Name of the inbound field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidEmail => "email",
            Self::InvalidUrl(_) => "article_url",
        }
    }
}

/// An email address and article link that passed format validation.
///
/// Only constructible through [`ArticleRequest::new`], so holding one means
/// both fields are well formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRequest {
    email: String,
    article_url: Url,
}

impl ArticleRequest {
    /// Validates untrusted input.
    ///
    /// # Errors
    ///
    /// Returns [`ArticleRequestError::InvalidEmail`] if `email` is not standard
    /// email syntax, or [`ArticleRequestError::InvalidUrl`] if `article_url`
    /// is not an absolute HTTP(S) URL with a host. Email is checked first.
    pub fn new(email: impl Into<String>, article_url: &str) -> Result<Self, ArticleRequestError> {
        let email = email.into();
        if !email.validate_email() {
            return Err(ArticleRequestError::InvalidEmail);
        }

        let article_url = parse_http_url(article_url)?;

        Ok(Self { email, article_url })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn article_url(&self) -> &Url {
        &self.article_url
    }
}
