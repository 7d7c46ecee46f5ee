//! Catalog subsystem.
//!
//! # Data Flow
//! ```text
//! PRODUCTS (static, ordered)
//!     → Catalog::load (validate ids, build id index)
//!     → CatalogService (listing / detail views)
//!     → shared via Arc with HTTP handlers and the exporter
//! ```
//!
//! # Design Decisions
//! - Product data is compiled in; nothing is read from disk
//! - Catalog is immutable once loaded
//! - Ids are restricted to URL-unreserved characters, so every id is both a
//!   literal request path segment and a safe output folder name

pub mod product;
pub mod service;

use std::collections::HashMap;

use thiserror::Error;

pub use product::{Product, PRODUCTS};
pub use service::CatalogService;

/// Errors raised while loading or querying the catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("product not found: {0}")]
    NotFound(String),

    #[error("product at position {0} has an empty id")]
    EmptyId(usize),

    #[error("duplicate product id: {0}")]
    DuplicateId(String),

    #[error("product id must use only URL-unreserved characters: {0:?}")]
    UnsafeId(String),

    #[error("render failed: {0}")]
    Render(String),
}

/// Validated, ordered product list with an id index.
#[derive(Debug)]
pub struct Catalog {
    products: &'static [Product],
    index: HashMap<&'static str, usize>,
}

impl Catalog {
    /// Load a catalog from a fixed product list.
    pub fn load(products: &'static [Product]) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(products.len());

        for (pos, product) in products.iter().enumerate() {
            if product.id.is_empty() {
                return Err(CatalogError::EmptyId(pos));
            }
            if !is_safe_segment(product.id) {
                return Err(CatalogError::UnsafeId(product.id.to_string()));
            }
            if index.insert(product.id, pos).is_some() {
                return Err(CatalogError::DuplicateId(product.id.to_string()));
            }
        }

        Ok(Self { products, index })
    }

    /// Load the built-in catalog.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::load(PRODUCTS)
    }

    /// All products, in listing order.
    pub fn products(&self) -> &'static [Product] {
        self.products
    }

    /// All product ids, in listing order.
    pub fn ids(&self) -> Vec<String> {
        self.products.iter().map(|p| p.id.to_string()).collect()
    }

    /// Exact-match lookup by id.
    pub fn get(&self, id: &str) -> Option<&'static Product> {
        let products = self.products;
        self.index.get(id).map(|&pos| &products[pos])
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// RFC 3986 unreserved characters only, excluding the dot segments.
fn is_safe_segment(id: &str) -> bool {
    id != "."
        && id != ".."
        && id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~'))
}
