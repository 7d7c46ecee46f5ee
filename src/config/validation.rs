//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses, prefixes and value ranges
//! - Guard the export directory against destructive values
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function: AppConfig → Result<(), Vec<ValidationError>>

use std::net::SocketAddr;
use std::path::{Component, Path, PathBuf};

use thiserror::Error;

use crate::config::schema::AppConfig;

/// A single semantic problem with the configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field}: invalid socket address {value:?}")]
    InvalidAddress { field: &'static str, value: String },

    #[error("assets.url_prefix must be '/' followed by one path segment, got {0:?}")]
    InvalidAssetPrefix(String),

    #[error("export.out_dir must not be empty, '.', '/', or contain '..', got {0:?}")]
    UnsafeOutDir(String),

    #[error("export.out_dir {out_dir:?} overlaps assets.dir {assets_dir:?}")]
    OutDirOverlapsAssets { out_dir: String, assets_dir: String },

    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_address(&mut errors, "server.bind_address", &config.server.bind_address);
    if config.observability.metrics_enabled {
        check_address(
            &mut errors,
            "observability.metrics_address",
            &config.observability.metrics_address,
        );
    }

    if !is_valid_prefix(&config.assets.url_prefix) {
        errors.push(ValidationError::InvalidAssetPrefix(
            config.assets.url_prefix.clone(),
        ));
    }

    if let Err(e) = check_out_dir(&config.export.out_dir, &config.assets.dir) {
        errors.push(e);
    }

    if config.server.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("server.request_timeout_secs"));
    }
    if config.export.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("export.timeout_secs"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Check that `out_dir` is safe to delete and recreate.
///
/// The directory must be a proper subdirectory (no `..`, not the working
/// directory or a filesystem root) and must neither equal, contain, nor sit
/// inside `assets_dir`. Paths are compared lexically after resolving
/// relative paths against the working directory.
pub fn check_out_dir(out_dir: &str, assets_dir: &str) -> Result<(), ValidationError> {
    let unsafe_dir = || ValidationError::UnsafeOutDir(out_dir.to_string());

    let raw = Path::new(out_dir.trim());
    if raw.components().any(|c| c == Component::ParentDir) {
        return Err(unsafe_dir());
    }
    let out = lexical(&absolute(raw));
    if out.parent().is_none() || lexical(raw).as_os_str().is_empty() {
        return Err(unsafe_dir());
    }

    let assets = lexical(&absolute(Path::new(assets_dir.trim())));
    if out.starts_with(&assets) || assets.starts_with(&out) {
        return Err(ValidationError::OutDirOverlapsAssets {
            out_dir: out_dir.to_string(),
            assets_dir: assets_dir.to_string(),
        });
    }
    Ok(())
}

fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}

/// Drop `.` components and fold `..` into their parent.
fn lexical(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

fn check_address(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}

fn is_valid_prefix(prefix: &str) -> bool {
    match prefix.strip_prefix('/') {
        Some(segment) => {
            !segment.is_empty()
                && segment != "."
                && segment != ".."
                && !segment.contains(['/', '\\', '{', '}', '*'])
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = AppConfig::default();
        config.server.bind_address = "not-an-address".into();
        config.assets.url_prefix = "assets".into();
        config.export.out_dir = ".".into();
        config.export.timeout_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::UnsafeOutDir(".".into())));
        assert!(errors.contains(&ValidationError::ZeroTimeout("export.timeout_secs")));
    }

    #[test]
    fn test_asset_prefix_rules() {
        assert!(is_valid_prefix("/assets"));
        assert!(is_valid_prefix("/static"));
        assert!(!is_valid_prefix("/"));
        assert!(!is_valid_prefix("/a/b"));
        assert!(!is_valid_prefix("/.."));
        assert!(!is_valid_prefix("assets"));
    }

    #[test]
    fn test_out_dir_must_not_overlap_assets() {
        for (out_dir, assets_dir) in [
            ("assets", "assets"),
            ("./assets", "assets"),
            ("assets/", "./assets"),
            ("site", "site/assets"),
            ("assets/out", "assets"),
        ] {
            assert!(
                matches!(
                    check_out_dir(out_dir, assets_dir),
                    Err(ValidationError::OutDirOverlapsAssets { .. })
                ),
                "{out_dir:?} vs {assets_dir:?} should overlap"
            );
        }
        assert!(check_out_dir("out", "assets").is_ok());
        assert!(check_out_dir("site/out", "site/assets").is_ok());
        assert!(check_out_dir("assets-out", "assets").is_ok());
    }

    #[test]
    fn test_out_dir_rejects_parent_and_root() {
        for out_dir in ["..", "../out", "out/../..", "/", ".", "./", ""] {
            assert_eq!(
                check_out_dir(out_dir, "assets"),
                Err(ValidationError::UnsafeOutDir(out_dir.to_string())),
                "{out_dir:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_overlapping_out_dir_fails_config() {
        let mut config = AppConfig::default();
        config.export.out_dir = "./assets".into();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::OutDirOverlapsAssets {
                out_dir: "./assets".into(),
                assets_dir: "assets".into(),
            }]
        );
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = AppConfig::default();
        config.observability.metrics_address = "nope".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert!(validate_config(&config).is_err());
    }
}
