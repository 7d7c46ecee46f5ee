//! The route table.
//!
//! # Responsibilities
//! - Declare every route the site serves, with its accepted methods
//! - Mount the table onto an axum `Router` for the live server
//! - Expose the same entries to the static exporter
//!
//! # Design Decisions
//! - Explicit registry instead of introspecting the framework's router
//! - Parameterized routes declare their own value source; the exporter
//!   never guesses from path prefixes
//! - Entries are yielded in lexicographic pattern order (deterministic export)

use std::path::Path;

use axum::http::Method;
use axum::routing::{get, MethodRouter};
use axum::Router;
use tower_http::services::ServeDir;

use crate::catalog::Catalog;
use crate::http::handlers;
use crate::http::server::AppState;
use crate::routing::pattern;

/// Builds the axum method router for a page route.
pub type HandlerFn = fn() -> MethodRouter<AppState>;

/// Produces the concrete values a one-parameter route should be exported for.
pub type ParamSource = fn(&Catalog) -> Vec<String>;

/// What a route entry serves.
#[derive(Clone, Copy)]
pub enum RouteTarget {
    /// A rendered page.
    Page(HandlerFn),
    /// The static asset bundle, served from the configured directory.
    Assets,
}

/// A single registered route.
#[derive(Clone)]
pub struct RouteEntry {
    pub pattern: String,
    pub methods: Vec<Method>,
    pub target: RouteTarget,
    pub params: Option<ParamSource>,
}

impl RouteEntry {
    /// A GET page route.
    pub fn page(pattern: impl Into<String>, handler: HandlerFn) -> Self {
        Self {
            pattern: pattern.into(),
            methods: vec![Method::GET],
            target: RouteTarget::Page(handler),
            params: None,
        }
    }

    /// The asset bundle mount (e.g. `/assets`).
    pub fn assets(prefix: impl Into<String>) -> Self {
        Self {
            pattern: prefix.into(),
            methods: vec![Method::GET],
            target: RouteTarget::Assets,
            params: None,
        }
    }

    /// Override the accepted methods.
    pub fn with_methods(mut self, methods: Vec<Method>) -> Self {
        self.methods = methods;
        self
    }

    /// Attach a parameter value source.
    pub fn with_params(mut self, source: ParamSource) -> Self {
        self.params = Some(source);
        self
    }

    pub fn param_count(&self) -> usize {
        pattern::param_count(&self.pattern)
    }

    /// Whether the route answers read-only fetches.
    pub fn accepts_get(&self) -> bool {
        self.methods.contains(&Method::GET)
    }

    pub fn is_assets(&self) -> bool {
        matches!(self.target, RouteTarget::Assets)
    }
}

impl std::fmt::Debug for RouteEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteEntry")
            .field("pattern", &self.pattern)
            .field("methods", &self.methods)
            .field("assets", &self.is_assets())
            .field("has_params", &self.params.is_some())
            .finish()
    }
}

/// Registry of routes shared by the server and the exporter.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The site's routes: listing, product detail, asset bundle.
    pub fn standard(asset_prefix: &str) -> Self {
        Self::new()
            .with(RouteEntry::page("/", || get(handlers::listing)))
            .with(
                RouteEntry::page("/product/{id}", || get(handlers::product_detail))
                    .with_params(Catalog::ids),
            )
            .with(RouteEntry::assets(asset_prefix))
    }

    /// Register an entry.
    pub fn with(mut self, entry: RouteEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Entries in lexicographic pattern order.
    pub fn entries(&self) -> Vec<&RouteEntry> {
        let mut entries: Vec<&RouteEntry> = self.entries.iter().collect();
        entries.sort_by(|a, b| a.pattern.cmp(&b.pattern));
        entries
    }

    /// Mount every entry onto an axum router.
    pub fn to_router(&self, state: AppState, assets_dir: &Path) -> Router {
        let mut router = Router::new();
        for entry in &self.entries {
            router = match entry.target {
                RouteTarget::Page(handler) => router.route(&entry.pattern, handler()),
                RouteTarget::Assets => {
                    router.nest_service(&entry.pattern, ServeDir::new(assets_dir))
                }
            };
        }
        router.fallback(handlers::fallback).with_state(state)
    }
}
