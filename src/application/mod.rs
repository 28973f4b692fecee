//! Application layer services implementing business logic.
//!
//! Services consume the delivery traits from [`crate::domain::delivery`] and
//! provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::article_service::ArticleService`] - Validates requests and relays them
//! - [`services::delivery_service::RetryingDeliverer`] - Fixed-schedule retry loop
//! - [`services::backoff::BackoffSchedule`] - Pure attempt-to-delay schedule

pub mod services;
