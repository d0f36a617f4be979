//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::CatalogService;

#[derive(Clone)]
pub struct AppState {
    pub catalog_service: Arc<CatalogService>,
    /// Documentation link advertised on `GET /`.
    pub docs_url: Option<String>,
}

impl AppState {
    pub fn new(catalog_service: Arc<CatalogService>) -> Self {
        Self {
            catalog_service,
            docs_url: None,
        }
    }

    pub fn with_docs_url(mut self, docs_url: Option<String>) -> Self {
        self.docs_url = docs_url;
        self
    }
}
