//! # Article Relay
//!
//! Accepts an email address and an article URL, tags the request with a
//! session id, and relays it to an automation webhook with bounded retry.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Request entities and delivery traits
//! - **Application Layer** ([`application`]) - Request handling and the retry loop
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest transport and tokio timer
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Delivery
//!
//! Each accepted request is posted to the webhook up to five times. After a
//! failed attempt the relay waits 1, 2, 4 and then 8 seconds before the next
//! one; a fifth failure ends the sequence and the client receives a
//! `502 Bad Gateway`. Each attempt has a 10 second timeout.
//!
//! ## Quick Start
//!
//! ```bash
//! export WEBHOOK_URL="https://automation.example.com/webhook/article"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ArticleService, BackoffSchedule, RetryingDeliverer};
    pub use crate::domain::delivery::{
        AttemptError, Deliverer, DeliveryOutcome, Sleeper, WebhookTransport,
    };
    pub use crate::domain::entities::{ArticleRequest, DeliveryPayload};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
