//! Static export subsystem.
//!
//! # Data Flow
//! ```text
//! RouteTable entries (sorted by pattern)
//!     → skip asset mount and non-GET routes
//!     → expand parameterized routes via their value source
//!     → in-process GET through the server's Router (tower oneshot)
//!     → layout.rs (path → folder/index.html, asset rewrite by depth)
//!     → write under out_dir
//! Asset dir → assets.rs (recursive copy into out_dir/<prefix>)
//!     → report.rs (exported paths + skipped routes)
//! ```
//!
//! # Design Decisions
//! - Output directory is recreated every run; exports are idempotent
//! - The output directory is re-checked against the asset dir before removal
//! - A failing route is recorded and skipped; only I/O failures abort
//! - Single pass, one request at a time

pub mod assets;
pub mod exporter;
pub mod layout;
pub mod report;

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::ValidationError;

pub use exporter::Exporter;
pub use report::{ExportReport, SkipReason, SkippedRoute};

/// Fatal export failures.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("asset walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("failed to read response body for {path}: {message}")]
    Body { path: String, message: String },

    #[error("export exceeded its {0}s budget")]
    Timeout(u64),

    #[error("refusing to recreate output directory: {0}")]
    UnsafeOutDir(#[from] ValidationError),
}

impl ExportError {
    /// Adapter for `map_err` on filesystem calls.
    pub(crate) fn io(action: &'static str, path: &Path) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.to_path_buf();
        move |source| ExportError::Io {
            action,
            path,
            source,
        }
    }
}
