//! Recursive copy of the asset bundle.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::export::ExportError;

/// Copy `src` into `dst`, recreating the directory structure.
///
/// Returns the number of files copied. A missing `src` copies nothing.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<usize, ExportError> {
    if !src.is_dir() {
        tracing::debug!(source = %src.display(), "No asset directory, skipping copy");
        return Ok(0);
    }

    let mut copied = 0;
    for entry in WalkDir::new(src).sort_by_file_name() {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(ExportError::io("create", &target))?;
        } else {
            fs::copy(entry.path(), &target).map_err(ExportError::io("copy", &target))?;
            copied += 1;
        }
    }

    Ok(copied)
}
