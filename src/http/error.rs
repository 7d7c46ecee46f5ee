//! Handler errors and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::observability::metrics;
use crate::render::Renderer;

/// Error returned from page handlers.
#[derive(Debug, Error)]
pub enum AppError {
    /// Unknown product or path; carries the rendered 404 page.
    #[error("not found: {what}")]
    NotFound { what: String, page: String },

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(renderer: &Renderer, what: impl Into<String>) -> Self {
        let what = what.into();
        let page = renderer.not_found(&what).unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to render not-found page");
            "Not Found".to_string()
        });
        Self::NotFound { what, page }
    }

    /// Map a catalog error, rendering the 404 page when needed.
    pub fn from_catalog(err: CatalogError, renderer: &Renderer) -> Self {
        match err {
            CatalogError::NotFound(id) => Self::not_found(renderer, format!("product {id}")),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound { what, page } => {
                tracing::debug!(what = %what, "Not found");
                metrics::record_not_found();
                (StatusCode::NOT_FOUND, Html(page)).into_response()
            }
            AppError::Internal(message) => {
                tracing::error!(error = %message, "Handler failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}
