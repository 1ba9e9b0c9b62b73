//! Configuration types for batch SVG-to-PDF conversion.
//!
//! All batch behaviour is controlled through [`BatchConfig`], built via its
//! [`BatchConfigBuilder`]. Keeping every knob in one struct makes it trivial
//! to share a config across jobs, log it, and diff two runs to understand why
//! their outputs differ.
//!
//! # Design choice: builder over constructor
//! The builder lets callers set only what they care about and rely on
//! well-documented defaults for the rest, and stays source-compatible when a
//! new field is added.

use crate::error::BatchError;
use crate::progress::BatchProgressCallback;
use std::fmt;
use std::sync::Arc;

/// Configuration for one batch run.
///
/// Built via [`BatchConfig::builder()`] or [`BatchConfig::default()`].
///
/// # Example
/// ```rust
/// use svg2pdf_batch::BatchConfig;
///
/// let config = BatchConfig::builder()
///     .command("inkscape")
///     .jobs(4)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct BatchConfig {
    /// External converter executable. Default: `"inkscape"`.
    ///
    /// Anything that accepts `<input.svg> --export-filename=<output.pdf>`
    /// works; Inkscape is the tool that established that flag.
    pub command: String,

    /// Extra arguments appended to every converter invocation. Default: none.
    ///
    /// Appended after the input path and `--export-filename=` argument, so
    /// tool-specific flags (`--export-area-drawing`, `-D`, …) can be passed
    /// through without this crate knowing about them.
    pub extra_args: Vec<String>,

    /// Worker-pool size: number of converter processes run concurrently.
    /// Default: available hardware parallelism.
    ///
    /// Each job is one whole external process, so the sweet spot is the core
    /// count. Raising it further just multiplies memory pressure from
    /// concurrent renderer instances without finishing the queue sooner.
    pub jobs: usize,

    /// Re-render even when the output PDF is newer than the input. Default: false.
    ///
    /// The freshness check makes repeated runs cheap (a no-op second run),
    /// but it trusts mtimes. `force` is the escape hatch when the converter
    /// itself changed, or a previous run left a truncated output with a
    /// plausible timestamp.
    pub force: bool,

    /// Progress callback receiving per-file events. Default: none.
    pub progress: Option<Arc<dyn BatchProgressCallback>>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            command: "inkscape".to_string(),
            extra_args: Vec::new(),
            jobs: default_jobs(),
            force: false,
            progress: None,
        }
    }
}

/// Available hardware parallelism, falling back to 1 when unknown.
fn default_jobs() -> usize {
    std::thread::available_parallelism()
        .map(std::num::NonZeroUsize::get)
        .unwrap_or(1)
}

impl fmt::Debug for BatchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BatchConfig")
            .field("command", &self.command)
            .field("extra_args", &self.extra_args)
            .field("jobs", &self.jobs)
            .field("force", &self.force)
            .field(
                "progress",
                &self.progress.as_ref().map(|_| "<dyn BatchProgressCallback>"),
            )
            .finish()
    }
}

impl BatchConfig {
    /// Create a new builder for `BatchConfig`.
    pub fn builder() -> BatchConfigBuilder {
        BatchConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`BatchConfig`].
#[derive(Debug)]
pub struct BatchConfigBuilder {
    config: BatchConfig,
}

impl BatchConfigBuilder {
    pub fn command(mut self, command: impl Into<String>) -> Self {
        self.config.command = command.into();
        self
    }

    pub fn extra_arg(mut self, arg: impl Into<String>) -> Self {
        self.config.extra_args.push(arg.into());
        self
    }

    pub fn extra_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.extra_args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn jobs(mut self, n: usize) -> Self {
        self.config.jobs = n.max(1);
        self
    }

    pub fn force(mut self, v: bool) -> Self {
        self.config.force = v;
        self
    }

    pub fn progress(mut self, cb: Arc<dyn BatchProgressCallback>) -> Self {
        self.config.progress = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<BatchConfig, BatchError> {
        let c = &self.config;
        if c.command.trim().is_empty() {
            return Err(BatchError::InvalidConfig(
                "Converter command must not be empty".into(),
            ));
        }
        if c.jobs == 0 {
            return Err(BatchError::InvalidConfig("jobs must be >= 1".into()));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let c = BatchConfig::default();
        assert_eq!(c.command, "inkscape");
        assert!(c.jobs >= 1);
        assert!(!c.force);
        assert!(c.extra_args.is_empty());
    }

    #[test]
    fn builder_sets_fields() {
        let c = BatchConfig::builder()
            .command("rsvg-convert")
            .jobs(3)
            .force(true)
            .extra_arg("--export-area-drawing")
            .build()
            .unwrap();
        assert_eq!(c.command, "rsvg-convert");
        assert_eq!(c.jobs, 3);
        assert!(c.force);
        assert_eq!(c.extra_args, vec!["--export-area-drawing"]);
    }

    #[test]
    fn jobs_clamps_to_one() {
        let c = BatchConfig::builder().jobs(0).build().unwrap();
        assert_eq!(c.jobs, 1);
    }

    #[test]
    fn empty_command_rejected() {
        let err = BatchConfig::builder().command("  ").build().unwrap_err();
        assert!(err.to_string().contains("command"));
    }
}
