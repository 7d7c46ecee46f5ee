//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! RouteTable::standard()
//!     → table.rs (entries: pattern, methods, target, param source)
//!     → to_router() → axum Router (live server, in-process export)
//!     → entries()   → exporter enumeration
//!
//! Parameterized entries:
//!     pattern.rs (param_count, substitute)
//!     → param source yields values → concrete paths
//! ```
//!
//! # Design Decisions
//! - Routes declared once, consumed by both server and exporter
//! - Immutable after construction
//! - Deterministic: entries ordered by pattern

pub mod pattern;
pub mod table;

pub use table::{HandlerFn, ParamSource, RouteEntry, RouteTable, RouteTarget};
