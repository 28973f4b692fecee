//! Domain layer containing request entities and delivery contracts.
//!
//! The domain has no dependencies on infrastructure or presentation layers.
//!
//! # Architecture
//!
//! - [`entities`] - Validated request and outbound payload
//! - [`delivery`] - Transport, sleep and delivery traits plus the outcome type
//!
//! # Request Flow
//!
//! 1. HTTP handler receives `POST /process-article`
//! 2. [`entities::ArticleRequest`] validates the email and article URL
//! 3. [`entities::DeliveryPayload`] attaches a fresh session id
//! 4. A [`delivery::Deliverer`] posts the payload, retrying on a fixed schedule
//! 5. The [`delivery::DeliveryOutcome`] is translated into the HTTP response

pub mod delivery;
pub mod entities;
