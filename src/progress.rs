//! Progress-callback trait for per-file conversion events.
//!
//! Inject an [`Arc<dyn BatchProgressCallback>`] via
//! [`crate::config::BatchConfigBuilder::progress`] to receive real-time
//! events as the batch processes each file.
//!
//! # Why callbacks instead of channels?
//!
//! The callback approach is the least-invasive integration point: callers can
//! forward events to a channel, a log, or a terminal — without the library
//! knowing anything about how the host application communicates. The trait is
//! `Send + Sync` because jobs run concurrently on the worker pool.

use crate::error::FileError;
use std::path::Path;
use std::sync::Arc;

/// Called by the batch as it processes each file.
///
/// All methods have default no-op implementations so callers only override
/// what they care about. Events for different files may arrive concurrently
/// and in any order; within one file, `on_render_start` always precedes
/// `on_rendered` / `on_render_error`, and `on_skip` fires only for files that
/// are never dispatched.
pub trait BatchProgressCallback: Send + Sync {
    /// Called once before any job is dispatched.
    ///
    /// `total` is the number of qualifying candidates (after the extension
    /// filter), not the raw argument count.
    fn on_batch_start(&self, total: usize) {
        let _ = total;
    }

    /// Called when a file is skipped because its output is already fresher.
    fn on_skip(&self, input: &Path) {
        let _ = input;
    }

    /// Called after the converter process was spawned, before it is awaited.
    fn on_render_start(&self, input: &Path, output: &Path) {
        let _ = (input, output);
    }

    /// Called when the converter exited with a real exit code.
    fn on_rendered(&self, input: &Path, output: &Path) {
        let _ = (input, output);
    }

    /// Called when the converter died abnormally (signal, wait failure).
    fn on_render_error(&self, input: &Path, output: &Path, error: &FileError) {
        let _ = (input, output, error);
    }

    /// Called once after every job has completed.
    fn on_batch_complete(&self, total: usize, rendered: usize, skipped: usize, failed: usize) {
        let _ = (total, rendered, skipped, failed);
    }
}

/// A no-op implementation for callers that don't need progress events.
///
/// This is the default when no callback is configured.
pub struct NoopProgressCallback;

impl BatchProgressCallback for NoopProgressCallback {}

/// Line-oriented console reporter.
///
/// Prints the batch's classic status protocol to stdout, one line per event:
///
/// ```text
/// Skipped: <input>
/// Rendering: <input> -> <output>
/// Rendered: <input> -> <output>
/// ```
///
/// Failures go to **stderr** (`Failed: <input> -> <output>: <error>`) so
/// stdout carries only the three statuses above and stays script-friendly.
/// Lines from different files interleave in completion order.
pub struct ConsoleProgress;

impl BatchProgressCallback for ConsoleProgress {
    fn on_skip(&self, input: &Path) {
        println!("Skipped: {}", input.display());
    }

    fn on_render_start(&self, input: &Path, output: &Path) {
        println!("Rendering: {} -> {}", input.display(), output.display());
    }

    fn on_rendered(&self, input: &Path, output: &Path) {
        println!("Rendered: {} -> {}", input.display(), output.display());
    }

    fn on_render_error(&self, input: &Path, output: &Path, error: &FileError) {
        eprintln!(
            "Failed: {} -> {}: {}",
            input.display(),
            output.display(),
            error
        );
    }
}

/// Convenience alias matching the type stored in [`crate::config::BatchConfig`].
pub type ProgressCallback = Arc<dyn BatchProgressCallback>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct TrackingCallback {
        skips: AtomicUsize,
        starts: AtomicUsize,
        rendered: AtomicUsize,
        errors: AtomicUsize,
        batch_total: AtomicUsize,
    }

    impl TrackingCallback {
        fn new() -> Self {
            Self {
                skips: AtomicUsize::new(0),
                starts: AtomicUsize::new(0),
                rendered: AtomicUsize::new(0),
                errors: AtomicUsize::new(0),
                batch_total: AtomicUsize::new(0),
            }
        }
    }

    impl BatchProgressCallback for TrackingCallback {
        fn on_batch_start(&self, total: usize) {
            self.batch_total.store(total, Ordering::SeqCst);
        }

        fn on_skip(&self, _input: &Path) {
            self.skips.fetch_add(1, Ordering::SeqCst);
        }

        fn on_render_start(&self, _input: &Path, _output: &Path) {
            self.starts.fetch_add(1, Ordering::SeqCst);
        }

        fn on_rendered(&self, _input: &Path, _output: &Path) {
            self.rendered.fetch_add(1, Ordering::SeqCst);
        }

        fn on_render_error(&self, _input: &Path, _output: &Path, _error: &FileError) {
            self.errors.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn noop_callback_does_not_panic() {
        let cb = NoopProgressCallback;
        let a = PathBuf::from("a.svg");
        let pdf = PathBuf::from("a.pdf");
        cb.on_batch_start(2);
        cb.on_skip(&a);
        cb.on_render_start(&a, &pdf);
        cb.on_rendered(&a, &pdf);
        cb.on_render_error(
            &a,
            &pdf,
            &FileError::Terminated {
                input: a.clone(),
                signal: Some(9),
            },
        );
        cb.on_batch_complete(2, 1, 1, 0);
    }

    #[test]
    fn tracking_callback_receives_events() {
        let t = TrackingCallback::new();
        let a = PathBuf::from("a.svg");
        let b = PathBuf::from("b.svg");
        let a_pdf = PathBuf::from("a.pdf");

        t.on_batch_start(2);
        t.on_render_start(&a, &a_pdf);
        t.on_rendered(&a, &a_pdf);
        t.on_skip(&b);

        assert_eq!(t.batch_total.load(Ordering::SeqCst), 2);
        assert_eq!(t.starts.load(Ordering::SeqCst), 1);
        assert_eq!(t.rendered.load(Ordering::SeqCst), 1);
        assert_eq!(t.skips.load(Ordering::SeqCst), 1);
        assert_eq!(t.errors.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn arc_dyn_callback_works() {
        let cb: Arc<dyn BatchProgressCallback> = Arc::new(NoopProgressCallback);
        cb.on_batch_start(10);
        cb.on_skip(Path::new("x.svg"));
    }
}
