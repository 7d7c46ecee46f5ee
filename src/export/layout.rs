//! Output layout and asset reference rewriting.
//!
//! # Responsibilities
//! - Map a route path to its file under the output root (folder + index)
//! - Compute a page's depth below the output root
//! - Rewrite absolute asset references to page-relative ones
//!
//! # Design Decisions
//! - `/` maps to `index.html`; `/a/b` maps to `a/b/index.html`
//! - Paths with empty, `.` or `..` segments are refused, never normalized
//! - The rewrite is a literal substring replacement over the whole body

use std::path::{Path, PathBuf};

const INDEX_FILE: &str = "index.html";

/// File location (relative to the output root) for a concrete route path.
///
/// Returns `None` if the path would not stay inside the output root.
pub fn target_path(route_path: &str) -> Option<PathBuf> {
    let trimmed = route_path.strip_prefix('/')?;
    let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);

    let mut path = PathBuf::new();
    if !trimmed.is_empty() {
        for segment in trimmed.split('/') {
            if matches!(segment, "" | "." | "..") || segment.contains('\\') {
                return None;
            }
            path.push(segment);
        }
    }
    path.push(INDEX_FILE);
    Some(path)
}

/// Number of directories between the output root and the file.
pub fn depth(relative: &Path) -> usize {
    relative.components().count().saturating_sub(1)
}

/// `../` repeated `depth` times.
pub fn relative_prefix(depth: usize) -> String {
    "../".repeat(depth)
}

/// Rewrites `<prefix>/` references to `<up segments><subfolder>/`.
#[derive(Debug, Clone)]
pub struct AssetRewrite {
    absolute: String,
    subfolder: String,
}

impl AssetRewrite {
    /// `url_prefix` is the asset mount, e.g. `/assets`.
    pub fn new(url_prefix: &str) -> Self {
        let name = url_prefix.trim_matches('/');
        Self {
            absolute: format!("/{name}/"),
            subfolder: format!("{name}/"),
        }
    }

    /// Rewrite every absolute asset reference for a page at `depth`.
    pub fn apply(&self, body: &str, depth: usize) -> String {
        let relative = format!("{}{}", relative_prefix(depth), self.subfolder);
        body.replace(&self.absolute, &relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_maps_to_index() {
        assert_eq!(target_path("/"), Some(PathBuf::from("index.html")));
    }

    #[test]
    fn test_folder_plus_index_layout() {
        assert_eq!(
            target_path("/product/2"),
            Some(PathBuf::from("product/2/index.html"))
        );
        assert_eq!(target_path("/about"), Some(PathBuf::from("about/index.html")));
        assert_eq!(target_path("/about/"), Some(PathBuf::from("about/index.html")));
    }

    #[test]
    fn test_escaping_paths_refused() {
        assert_eq!(target_path("/product/.."), None);
        assert_eq!(target_path("/a//b"), None);
        assert_eq!(target_path("/./x"), None);
        assert_eq!(target_path("relative"), None);
    }

    #[test]
    fn test_depth() {
        assert_eq!(depth(Path::new("index.html")), 0);
        assert_eq!(depth(Path::new("about/index.html")), 1);
        assert_eq!(depth(Path::new("product/2/index.html")), 2);
    }

    #[test]
    fn test_rewrite_by_depth() {
        let rewrite = AssetRewrite::new("/assets");
        let body = r#"<link href="/assets/style.css"><img src="/assets/img/a.png">"#;

        assert_eq!(
            rewrite.apply(body, 0),
            r#"<link href="assets/style.css"><img src="assets/img/a.png">"#
        );
        assert_eq!(
            rewrite.apply(body, 2),
            r#"<link href="../../assets/style.css"><img src="../../assets/img/a.png">"#
        );
    }

    #[test]
    fn test_rewrite_leaves_other_links() {
        let rewrite = AssetRewrite::new("/assets");
        let body = r#"<a href="/product/1">x</a><a href="/assetsfoo">y</a>"#;
        assert_eq!(rewrite.apply(body, 1), body);
    }
}
