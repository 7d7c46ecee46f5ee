//! Read-only views over the catalog.

use std::sync::Arc;

use crate::catalog::{Catalog, CatalogError};
use crate::render::Renderer;

/// The listing and detail views, shared by the HTTP handlers and the exporter.
#[derive(Debug, Clone)]
pub struct CatalogService {
    catalog: Arc<Catalog>,
    renderer: Renderer,
}

impl CatalogService {
    pub fn new(catalog: Catalog, renderer: Renderer) -> Self {
        Self {
            catalog: Arc::new(catalog),
            renderer,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Render every product in catalog order.
    pub fn listing(&self) -> Result<String, CatalogError> {
        self.renderer
            .listing(self.catalog.products())
            .map_err(|e| CatalogError::Render(e.to_string()))
    }

    /// Render the detail page for `id`.
    pub fn detail(&self, id: &str) -> Result<String, CatalogError> {
        let product = self
            .catalog
            .get(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;
        self.renderer
            .detail(product)
            .map_err(|e| CatalogError::Render(e.to_string()))
    }
}
