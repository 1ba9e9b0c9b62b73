//! # svg2pdf-batch
//!
//! Batch-convert SVG files to PDF by driving an external renderer
//! (Inkscape by default), in parallel, with an mtime check that skips files
//! whose PDF is already up to date.
//!
//! ## Why this crate?
//!
//! Figure-heavy projects (LaTeX papers, documentation sites) accumulate
//! dozens of SVGs that must be re-exported to PDF whenever they change.
//! Driving the renderer by hand is slow and serial; a Makefile per figure
//! directory is busywork. This crate is the orchestration glue: discover,
//! filter, skip the fresh ones, and fan the rest out across a bounded pool of
//! converter processes. The SVG rendering itself stays entirely inside the
//! external tool.
//!
//! ## Pipeline Overview
//!
//! ```text
//! candidates (argv or recursive discovery)
//!  │
//!  ├─ 1. Filter    keep paths with an svg extension (case-insensitive)
//!  ├─ 2. Freshness skip when <name>.pdf exists and is strictly newer
//!  ├─ 3. Dispatch  <cmd> <in.svg> --export-filename=<out.pdf>, pool-bounded
//!  └─ 4. Report    Skipped / Rendering / Rendered lines + batch stats
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use svg2pdf_batch::{convert_tree, BatchConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = BatchConfig::builder().command("inkscape").build()?;
//!     let output = convert_tree(".", &config).await?;
//!     eprintln!(
//!         "{} rendered, {} skipped, {} failed",
//!         output.stats.rendered, output.stats.skipped, output.stats.failed
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `svg2pdf` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only deps:
//! ```toml
//! svg2pdf-batch = { version = "0.2", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod outcome;
pub mod pipeline;
pub mod progress;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{BatchConfig, BatchConfigBuilder};
pub use convert::{convert_batch, convert_batch_sync, convert_one, convert_tree};
pub use error::{BatchError, FileError};
pub use outcome::{BatchOutput, BatchStats, FileOutcome, FileReport};
pub use progress::{BatchProgressCallback, ConsoleProgress, NoopProgressCallback, ProgressCallback};
