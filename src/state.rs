//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::ArticleService;

#[derive(Clone)]
pub struct AppState {
    pub article_service: Arc<ArticleService>,
}

impl AppState {
    pub fn new(article_service: Arc<ArticleService>) -> Self {
        Self { article_service }
    }
}
