//! Shared helpers for integration tests.

use std::fs;
use std::path::Path;

use axum::body::Body;
use axum::http::{Request, Response};
use tower::ServiceExt;

use scamazon::{AppConfig, Catalog, CatalogService, HttpServer, Renderer};

/// Config rooted in a scratch directory: `<root>/assets` in, `<root>/out` out.
pub fn test_config(root: &Path) -> AppConfig {
    let mut config = AppConfig::default();
    config.assets.dir = root.join("assets").to_string_lossy().into_owned();
    config.export.out_dir = root.join("out").to_string_lossy().into_owned();
    config
}

/// The built-in catalog rendered with the configured asset prefix.
pub fn catalog_service(config: &AppConfig) -> CatalogService {
    CatalogService::new(
        Catalog::builtin().unwrap(),
        Renderer::new(&config.assets.url_prefix).unwrap(),
    )
}

pub fn server(config: AppConfig) -> HttpServer {
    let service = catalog_service(&config);
    HttpServer::new(config, service)
}

/// A small asset bundle with one nested file.
#[allow(dead_code)]
pub fn write_assets(dir: &Path) {
    fs::create_dir_all(dir.join("img")).unwrap();
    fs::write(dir.join("style.css"), "body { color: red; }").unwrap();
    fs::write(dir.join("img/badge.svg"), "<svg></svg>").unwrap();
}

/// Issue a GET through the router without a socket.
#[allow(dead_code)]
pub async fn get(server: &HttpServer, path: &str) -> Response<Body> {
    let request = Request::get(path).body(Body::empty()).unwrap();
    server.router().oneshot(request).await.unwrap()
}

#[allow(dead_code)]
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
