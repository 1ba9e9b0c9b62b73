//! Eager (whole-batch) conversion entry points.
//!
//! Every qualifying candidate becomes one independent job on a bounded
//! concurrent pool; the call returns only after all jobs have finished.
//! There is no cancellation and no per-job timeout: a hung converter holds
//! its pool slot, and transitively the batch, until it exits.

use crate::config::BatchConfig;
use crate::error::BatchError;
use crate::outcome::{BatchOutput, BatchStats, FileOutcome, FileReport};
use crate::pipeline::{discover, freshness, spawn};
use futures::stream::{self, StreamExt, TryStreamExt};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Convert an explicit list of candidate paths.
///
/// This is the primary entry point for the library.
///
/// Non-SVG candidates are silently excluded — no report, no progress event —
/// before anything else happens. The remaining files are processed
/// independently and concurrently (up to [`BatchConfig::jobs`] at a time):
/// skipped when their output is already fresher, otherwise dispatched to the
/// external converter.
///
/// # Returns
/// `Ok(BatchOutput)` with one [`FileReport`] per qualifying candidate, even
/// if some conversions failed (check `output.stats.failed`).
///
/// # Errors
/// Returns `Err(BatchError)` only for fatal errors that abort the batch:
/// - converter command cannot be started
/// - filesystem metadata unreadable during the freshness check
pub async fn convert_batch(
    candidates: Vec<PathBuf>,
    config: &BatchConfig,
) -> Result<BatchOutput, BatchError> {
    let total_start = Instant::now();

    // ── Step 1: Extension filter ─────────────────────────────────────────
    let inputs: Vec<PathBuf> = candidates
        .into_iter()
        .filter(|p| discover::is_svg_candidate(p))
        .collect();
    info!("Converting {} SVG file(s) with '{}'", inputs.len(), config.command);

    if let Some(ref cb) = config.progress {
        cb.on_batch_start(inputs.len());
    }

    // ── Step 2: Fan out over the worker pool ─────────────────────────────
    // buffer_unordered caps in-flight converter processes at `jobs`;
    // try_collect short-circuits on the first fatal error.
    let mut reports: Vec<FileReport> = stream::iter(
        inputs
            .into_iter()
            .map(|input| convert_one(input, config)),
    )
    .buffer_unordered(config.jobs)
    .try_collect()
    .await?;

    // Completion order is nondeterministic; sort for stable output.
    reports.sort_by(|a, b| a.input.cmp(&b.input));

    // ── Step 3: Aggregate stats ──────────────────────────────────────────
    let stats = BatchStats {
        candidates: reports.len(),
        rendered: reports.iter().filter(|r| r.outcome.is_rendered()).count(),
        skipped: reports.iter().filter(|r| r.outcome.is_skipped()).count(),
        failed: reports.iter().filter(|r| r.outcome.is_failed()).count(),
        total_duration_ms: total_start.elapsed().as_millis() as u64,
    };

    info!(
        "Batch complete: {} rendered, {} skipped, {} failed in {}ms",
        stats.rendered, stats.skipped, stats.failed, stats.total_duration_ms
    );

    if let Some(ref cb) = config.progress {
        cb.on_batch_complete(stats.candidates, stats.rendered, stats.skipped, stats.failed);
    }

    Ok(BatchOutput { reports, stats })
}

/// Discover every SVG file under `root` recursively and convert the lot.
///
/// The auto-discovery twin of [`convert_batch`]; the CLI uses it when no
/// explicit file list is given.
pub async fn convert_tree(
    root: impl AsRef<Path>,
    config: &BatchConfig,
) -> Result<BatchOutput, BatchError> {
    let root = root.as_ref();
    let found = discover::discover_svg_files(root)?;
    debug!("Discovered {} SVG file(s) under {}", found.len(), root.display());
    convert_batch(found, config).await
}

/// Synchronous wrapper around [`convert_batch`].
///
/// Creates a temporary tokio runtime internally.
pub fn convert_batch_sync(
    candidates: Vec<PathBuf>,
    config: &BatchConfig,
) -> Result<BatchOutput, BatchError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| BatchError::Internal(format!("Failed to create tokio runtime: {e}")))?
        .block_on(convert_batch(candidates, config))
}

/// Run the per-file decision procedure for a single already-filtered input.
///
/// Exposed for callers that manage their own scheduling; [`convert_batch`]
/// runs exactly this per candidate.
pub async fn convert_one(
    input: PathBuf,
    config: &BatchConfig,
) -> Result<FileReport, BatchError> {
    let start = Instant::now();
    let output = discover::derive_output(&input);

    // ── Freshness check ──────────────────────────────────────────────────
    if !config.force && freshness::output_is_fresh(&input, &output)? {
        debug!(input = %input.display(), "output is up to date");
        if let Some(ref cb) = config.progress {
            cb.on_skip(&input);
        }
        return Ok(FileReport {
            input,
            output,
            outcome: FileOutcome::Skipped,
            duration_ms: start.elapsed().as_millis() as u64,
        });
    }

    // ── Dispatch ─────────────────────────────────────────────────────────
    let child = spawn::spawn_converter(&config.command, &config.extra_args, &input, &output)?;
    if let Some(ref cb) = config.progress {
        cb.on_render_start(&input, &output);
    }

    // ── Completion ───────────────────────────────────────────────────────
    let outcome = match spawn::wait_converter(child, &input).await {
        Ok(()) => {
            if let Some(ref cb) = config.progress {
                cb.on_rendered(&input, &output);
            }
            FileOutcome::Rendered
        }
        Err(error) => {
            warn!(input = %input.display(), %error, "conversion failed");
            if let Some(ref cb) = config.progress {
                cb.on_render_error(&input, &output, &error);
            }
            FileOutcome::Failed { error }
        }
    };

    Ok(FileReport {
        input,
        output,
        outcome,
        duration_ms: start.elapsed().as_millis() as u64,
    })
}
