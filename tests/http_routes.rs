//! HTTP behaviour of the storefront, driven in-process.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use scamazon::catalog::PRODUCTS;
use scamazon::http::X_REQUEST_ID;
use handlebars::html_escape as escape;

mod common;

#[tokio::test]
async fn test_index_lists_all_products_in_order() {
    let tmp = tempfile::tempdir().unwrap();
    let server = common::server(common::test_config(tmp.path()));

    let res = common::get(&server, "/").await;
    assert_eq!(res.status(), StatusCode::OK);

    let html = common::body_string(res).await;
    assert!(html.contains("Scamazon"));

    let mut last = 0;
    for product in PRODUCTS {
        let pos = html.find(&escape(product.name)).expect("product missing from listing");
        assert!(pos > last, "{} out of order", product.name);
        last = pos;
        assert!(html.contains(&format!("href=\"/product/{}\"", product.id)));
    }
}

#[tokio::test]
async fn test_product_pages() {
    let tmp = tempfile::tempdir().unwrap();
    let server = common::server(common::test_config(tmp.path()));

    for product in PRODUCTS {
        let res = common::get(&server, &format!("/product/{}", product.id)).await;
        assert_eq!(res.status(), StatusCode::OK);

        let html = common::body_string(res).await;
        assert!(html.contains("Why this is a scam"));
        assert!(html.contains(&escape(product.name)));
        assert!(html.contains(product.price));
        assert!(html.contains(&escape(product.scam_note)));
    }
}

#[tokio::test]
async fn test_unknown_product_is_404() {
    let tmp = tempfile::tempdir().unwrap();
    let server = common::server(common::test_config(tmp.path()));

    let res = common::get(&server, "/product/999").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let html = common::body_string(res).await;
    assert!(html.contains("product 999"));
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let tmp = tempfile::tempdir().unwrap();
    let server = common::server(common::test_config(tmp.path()));

    let res = common::get(&server, "/checkout").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_assets_are_served() {
    let tmp = tempfile::tempdir().unwrap();
    common::write_assets(&tmp.path().join("assets"));
    let server = common::server(common::test_config(tmp.path()));

    let res = common::get(&server, "/assets/style.css").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(common::body_string(res).await, "body { color: red; }");

    let res = common::get(&server, "/assets/missing.css").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_request_id_assigned_and_propagated() {
    let tmp = tempfile::tempdir().unwrap();
    let server = common::server(common::test_config(tmp.path()));

    let res = common::get(&server, "/").await;
    assert!(res.headers().contains_key(X_REQUEST_ID));

    let request = Request::get("/")
        .header(X_REQUEST_ID, "abc-123")
        .body(Body::empty())
        .unwrap();
    let res = server.router().oneshot(request).await.unwrap();
    assert_eq!(res.headers()[X_REQUEST_ID], "abc-123");
}
