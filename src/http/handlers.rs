//! Page handlers.

use axum::extract::{Path, State};
use axum::http::Uri;
use axum::response::Html;

use crate::http::error::AppError;
use crate::http::server::AppState;
use crate::observability::metrics;

/// `GET /`
pub async fn listing(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let page = state
        .catalog
        .listing()
        .map_err(|e| AppError::from_catalog(e, state.catalog.renderer()))?;
    metrics::record_page_view("listing");
    Ok(Html(page))
}

/// `GET /product/{id}`
pub async fn product_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let page = state
        .catalog
        .detail(&id)
        .map_err(|e| AppError::from_catalog(e, state.catalog.renderer()))?;
    metrics::record_page_view("detail");
    Ok(Html(page))
}

/// Anything the route table does not cover.
pub async fn fallback(State(state): State<AppState>, uri: Uri) -> AppError {
    AppError::not_found(state.catalog.renderer(), uri.path())
}
