//! Infrastructure layer for external integrations.
//!
//! This layer implements the delivery traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`webhook`] - HTTP transport and timer for the automation webhook

pub mod webhook;
