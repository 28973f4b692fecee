//! HTTP request handlers for API endpoints.

pub mod article;
pub mod health;

pub use article::process_article_handler;
pub use health::health_handler;
