//! Utility functions shared across layers.
//!
//! - [`url_validator`] - Absolute HTTP(S) URL validation

pub mod url_validator;
