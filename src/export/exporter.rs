//! The export run.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::Router;
use tower::ServiceExt;

use crate::catalog::Catalog;
use crate::config::validation::check_out_dir;
use crate::export::assets::copy_tree;
use crate::export::layout::{self, AssetRewrite};
use crate::export::report::{ExportReport, SkipReason};
use crate::export::ExportError;
use crate::http::HttpServer;
use crate::observability::metrics;
use crate::routing::{pattern, RouteEntry, RouteTable};

/// Freezes a server's routes into a static file tree.
pub struct Exporter<'a> {
    router: Router,
    routes: &'a RouteTable,
    catalog: &'a Catalog,
    out_dir: PathBuf,
    assets_dir: PathBuf,
    asset_subfolder: String,
    rewrite: AssetRewrite,
    timeout: Duration,
}

impl<'a> Exporter<'a> {
    /// Build an exporter from the server's config, route table and catalog.
    pub fn new(server: &'a HttpServer) -> Self {
        let config = server.config();
        Self {
            router: server.router(),
            routes: server.routes(),
            catalog: server.catalog().catalog(),
            out_dir: PathBuf::from(&config.export.out_dir),
            assets_dir: PathBuf::from(&config.assets.dir),
            asset_subfolder: config.assets.subfolder().to_string(),
            rewrite: AssetRewrite::new(&config.assets.url_prefix),
            timeout: Duration::from_secs(config.export.timeout_secs),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Run the export under the configured wall-clock budget.
    pub async fn run(&self) -> Result<ExportReport, ExportError> {
        tokio::time::timeout(self.timeout, self.export())
            .await
            .map_err(|_| ExportError::Timeout(self.timeout.as_secs()))?
    }

    async fn export(&self) -> Result<ExportReport, ExportError> {
        check_out_dir(
            &self.out_dir.to_string_lossy(),
            &self.assets_dir.to_string_lossy(),
        )?;
        reset_dir(&self.out_dir)?;
        tracing::info!(out_dir = %self.out_dir.display(), "Output directory recreated");

        let mut report = ExportReport::default();

        for entry in self.routes.entries() {
            if entry.is_assets() || !entry.accepts_get() {
                tracing::debug!(route = %entry.pattern, "Not a page route, excluded");
                continue;
            }
            self.export_entry(entry, &mut report).await?;
        }

        let assets_out = self.out_dir.join(&self.asset_subfolder);
        report.assets_copied = copy_tree(&self.assets_dir, &assets_out)?;
        if report.assets_copied > 0 {
            tracing::info!(
                source = %self.assets_dir.display(),
                files = report.assets_copied,
                "Assets copied"
            );
        }

        Ok(report)
    }

    async fn export_entry(
        &self,
        entry: &RouteEntry,
        report: &mut ExportReport,
    ) -> Result<(), ExportError> {
        match (entry.param_count(), entry.params) {
            (0, _) => self.export_path(&entry.pattern, report).await,
            (1, Some(source)) => {
                for value in source(self.catalog) {
                    match pattern::substitute(&entry.pattern, &value) {
                        Some(path) => self.export_path(&path, report).await?,
                        None => skip(report, &entry.pattern, SkipReason::Dynamic),
                    }
                }
                Ok(())
            }
            _ => {
                skip(report, &entry.pattern, SkipReason::Dynamic);
                Ok(())
            }
        }
    }

    /// Fetch one concrete path in-process and write it out.
    async fn export_path(&self, path: &str, report: &mut ExportReport) -> Result<(), ExportError> {
        let Some(relative) = layout::target_path(path) else {
            skip(report, path, SkipReason::InvalidPath);
            return Ok(());
        };
        let Ok(request) = Request::get(path).body(Body::empty()) else {
            skip(report, path, SkipReason::InvalidPath);
            return Ok(());
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .unwrap_or_else(|never| match never {});

        let status = response.status();
        if !status.is_success() {
            skip(report, path, SkipReason::Status(status.as_u16()));
            return Ok(());
        }

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ExportError::Body {
                path: path.to_string(),
                message: e.to_string(),
            })?;
        let html = String::from_utf8_lossy(&bytes);
        let html = self.rewrite.apply(&html, layout::depth(&relative));

        let out_path = self.out_dir.join(&relative);
        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent).map_err(ExportError::io("create", parent))?;
        }
        fs::write(&out_path, html).map_err(ExportError::io("write", &out_path))?;

        tracing::info!(route = %path, file = %out_path.display(), "Exported");
        metrics::record_export_page("exported");
        report.exported.push(out_path);
        Ok(())
    }
}

fn skip(report: &mut ExportReport, route: &str, reason: SkipReason) {
    tracing::warn!(route = %route, reason = %reason, "Skipped");
    metrics::record_export_page("skipped");
    report.skip(route, reason);
}

/// Remove `dir` if present, then create it empty.
fn reset_dir(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() {
        fs::remove_dir_all(dir).map_err(ExportError::io("remove", dir))?;
    }
    fs::create_dir_all(dir).map_err(ExportError::io("create", dir))
}
