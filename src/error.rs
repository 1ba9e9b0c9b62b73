//! Error types for the svg2pdf-batch library.
//!
//! Two distinct error types reflect two distinct failure modes:
//!
//! * [`BatchError`] — **Fatal**: the batch cannot proceed at all (converter
//!   executable missing, directory traversal failed, filesystem metadata
//!   unreadable). Returned as `Err(BatchError)` from the top-level
//!   `convert_*` functions and aborts the run.
//!
//! * [`FileError`] — **Non-fatal**: a single file's converter process died
//!   abnormally but every sibling job is fine. Stored inside
//!   [`crate::outcome::FileReport`] so callers can inspect partial success
//!   rather than losing the whole batch to one bad file.
//!
//! The separation lets callers decide their own tolerance: abort on the first
//! file failure, log and continue, or collect all failures for a post-run
//! summary.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the svg2pdf-batch library.
///
/// Per-file failures use [`FileError`] and are stored in
/// [`crate::outcome::FileReport`] rather than propagated here.
#[derive(Debug, Error)]
pub enum BatchError {
    // ── Dispatch errors ───────────────────────────────────────────────────
    /// The converter executable could not be started at all.
    ///
    /// Unlike an abnormal converter exit, a spawn failure means every
    /// remaining job would fail identically, so it aborts the batch.
    #[error("Failed to start converter '{command}' for '{input}': {source}\nCheck the command exists and is executable.")]
    SpawnFailed {
        command: String,
        input: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Filesystem errors ─────────────────────────────────────────────────
    /// Recursive candidate discovery failed mid-walk.
    #[error("Failed to scan '{root}' for SVG files: {source}")]
    DiscoveryFailed {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Could not read filesystem metadata (mtime) needed for the freshness
    /// check.
    #[error("Failed to read metadata for '{path}': {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// A non-fatal error for a single file's conversion.
///
/// Stored in [`crate::outcome::FileReport`] when a job fails. The overall
/// batch always runs to completion regardless of how many jobs fail this way.
#[derive(Debug, Clone, Error, serde::Serialize, serde::Deserialize)]
pub enum FileError {
    /// The converter process was terminated by a signal before producing an
    /// exit code.
    #[error("Converter for '{input}' was terminated by signal {}",
            .signal.map_or_else(|| "?".to_string(), |s| s.to_string()))]
    Terminated {
        input: PathBuf,
        /// Signal number when the platform reports one (Unix only).
        signal: Option<i32>,
    },

    /// Waiting on the converter process failed with an I/O error.
    #[error("Failed waiting for converter on '{input}': {detail}")]
    WaitFailed { input: PathBuf, detail: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_failed_display_names_command() {
        let e = BatchError::SpawnFailed {
            command: "inkscape".into(),
            input: PathBuf::from("a.svg"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        let msg = e.to_string();
        assert!(msg.contains("inkscape"), "got: {msg}");
        assert!(msg.contains("a.svg"), "got: {msg}");
    }

    #[test]
    fn terminated_display_with_signal() {
        let e = FileError::Terminated {
            input: PathBuf::from("fig.svg"),
            signal: Some(9),
        };
        assert!(e.to_string().contains("signal 9"));
    }

    #[test]
    fn terminated_display_without_signal() {
        let e = FileError::Terminated {
            input: PathBuf::from("fig.svg"),
            signal: None,
        };
        assert!(e.to_string().contains("signal ?"));
    }

    #[test]
    fn invalid_config_display() {
        let e = BatchError::InvalidConfig("jobs must be >= 1".into());
        assert!(e.to_string().contains("jobs"));
    }
}
