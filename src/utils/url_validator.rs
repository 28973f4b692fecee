//! Absolute HTTP(S) URL validation.
//!
//! Article links and the webhook destination must both be absolute URLs with
//! an `http` or `https` scheme and a host.

use url::Url;

/// Errors that can occur during URL validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,
}

/// Parses `input` as an absolute HTTP(S) URL.
///
/// # Rules
///
/// 1. **Format**: must parse as an absolute URL (relative references are rejected)
/// 2. **Protocol**: only HTTP and HTTPS are allowed
/// 3. **Host**: must be present and non-empty
///
/// Rejects potentially dangerous protocols like `javascript:`, `data:`, `file:`, etc.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for malformed URLs.
/// Returns [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S) schemes.
/// Returns [`UrlValidationError::MissingHost`] when no host is present.
///
/// # Examples
///
/// ```ignore
/// let url = parse_http_url("https://example.com/article").unwrap();
/// assert_eq!(url.host_str(), Some("example.com"));
///
/// assert!(parse_http_url("not a url").is_err());
/// ```
pub fn parse_http_url(input: &str) -> Result<Url, UrlValidationError> {
    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(UrlValidationError::MissingHost),
    }
}
