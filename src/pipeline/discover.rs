//! Candidate discovery and path derivation.
//!
//! A candidate qualifies when its extension equals `svg`, compared
//! case-insensitively — both here during directory discovery and again in the
//! per-file filter, so auto-discovery and explicit file lists agree on
//! mixed-case names like `Logo.SVG`.

use crate::error::BatchError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// True when `path` has an `svg` extension, ASCII-case-insensitively.
///
/// Dotfiles like `.svg` have no extension in `Path` terms and do not qualify.
pub fn is_svg_candidate(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

/// Derive the output path: same location, `pdf` extension.
pub fn derive_output(input: &Path) -> PathBuf {
    input.with_extension("pdf")
}

/// Recursively enumerate all SVG files under `root`.
///
/// Results are sorted by path so runs are deterministic in which jobs get
/// queued first (completion order is still up to the pool). Traversal errors
/// (unreadable directory, dangling symlink metadata) are fatal.
pub fn discover_svg_files(root: &Path) -> Result<Vec<PathBuf>, BatchError> {
    let mut found = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|source| BatchError::DiscoveryFailed {
            root: root.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_file() && is_svg_candidate(entry.path()) {
            found.push(entry.into_path());
        }
    }
    Ok(found)
}
