//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router from the route table
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind server to listener and shut down on Ctrl+C
//! - Hand the same router to in-process callers (the exporter)

use std::path::Path;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::catalog::CatalogService;
use crate::config::AppConfig;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::lifecycle::signals::shutdown_signal;
use crate::routing::RouteTable;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
}

/// HTTP server for the catalog.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
    routes: RouteTable,
    catalog: CatalogService,
}

impl HttpServer {
    /// Create a server with the standard route table.
    pub fn new(config: AppConfig, catalog: CatalogService) -> Self {
        let routes = RouteTable::standard(&config.assets.url_prefix);
        Self::with_routes(config, catalog, routes)
    }

    /// Create a server over a custom route table.
    pub fn with_routes(config: AppConfig, catalog: CatalogService, routes: RouteTable) -> Self {
        let state = AppState {
            catalog: catalog.clone(),
        };
        let router = Self::build_router(&config, state, &routes);
        Self {
            router,
            config,
            routes,
            catalog,
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &AppConfig, state: AppState, routes: &RouteTable) -> Router {
        routes
            .to_router(state, Path::new(&config.assets.dir))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.server.request_timeout_secs,
            )))
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http())
            .layer(set_request_id_layer())
    }

    /// The fully layered router, for in-process requests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// The route table this server was built from.
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// The catalog the handlers serve.
    pub fn catalog(&self) -> &CatalogService {
        &self.catalog
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
