//! Business logic services for the application layer.

pub mod article_service;
pub mod backoff;
pub mod delivery_service;

pub use article_service::{ArticleService, ProcessedArticle};
pub use backoff::BackoffSchedule;
pub use delivery_service::RetryingDeliverer;
