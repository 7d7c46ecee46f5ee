//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware layers)
//!     → request.rs (assign / propagate x-request-id)
//!     → routing table → handlers.rs (listing, detail, fallback)
//!     → error.rs (NotFound → 404 page)
//!     → Send to client
//! ```
//!
//! The same `Router` is driven in-process by the static exporter.

pub mod error;
pub mod handlers;
pub mod request;
pub mod server;

pub use error::AppError;
pub use request::X_REQUEST_ID;
pub use server::{AppState, HttpServer};
