//! Output freshness: decide whether a candidate needs (re)conversion.
//!
//! The rule is deliberately strict: the output must exist AND carry a
//! modification time strictly greater than the input's. An equal timestamp
//! (coarse filesystem clocks, `cp -p`) re-renders, which costs one redundant
//! converter run instead of a silently stale PDF.

use crate::error::BatchError;
use std::path::Path;
use std::time::SystemTime;

/// True when `output` exists and is strictly newer than `input`.
///
/// A missing output is simply "not fresh"; an unreadable *input* is fatal
/// because every downstream step needs that file anyway.
pub fn output_is_fresh(input: &Path, output: &Path) -> Result<bool, BatchError> {
    let output_mtime = match output.metadata() {
        Ok(meta) => modified(output, meta)?,
        // Vanished or never rendered: needs conversion either way.
        Err(_) => return Ok(false),
    };

    let input_meta = input
        .metadata()
        .map_err(|source| BatchError::Metadata {
            path: input.to_path_buf(),
            source,
        })?;
    let input_mtime = modified(input, input_meta)?;

    Ok(output_mtime > input_mtime)
}

fn modified(path: &Path, meta: std::fs::Metadata) -> Result<SystemTime, BatchError> {
    meta.modified().map_err(|source| BatchError::Metadata {
        path: path.to_path_buf(),
        source,
    })
}
