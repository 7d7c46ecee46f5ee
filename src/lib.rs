//! Scamazon: a parody storefront and its static-site exporter.
//!
//! # Architecture Overview
//!
//! ```text
//!   Browser ──GET──▶ scamazon (axum) ─┐
//!                                     │   ┌───────────┐    ┌──────────────┐
//!                                     ├──▶│  routing  │───▶│ http handlers│
//!   scamazon-export ──oneshot─────────┘   │  table    │    └──────┬───────┘
//!        │                                └───────────┘           │
//!        │                                                        ▼
//!        │                                              ┌──────────────────┐
//!        │                                              │ catalog service  │
//!        │                                              │  + render (HTML) │
//!        │                                              └──────────────────┘
//!        ▼
//!   export: layout (folder + index), asset rewrite, asset copy, report
//! ```

pub mod catalog;
pub mod config;
pub mod export;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod render;
pub mod routing;

pub use catalog::{Catalog, CatalogService, Product};
pub use config::AppConfig;
pub use export::{ExportReport, Exporter};
pub use http::HttpServer;
pub use render::Renderer;
