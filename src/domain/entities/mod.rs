//! Transient per-request entities. Nothing here is persisted.

mod article_request;
mod delivery_payload;

pub use article_request::{ArticleRequest, ArticleRequestError};
pub use delivery_payload::DeliveryPayload;
