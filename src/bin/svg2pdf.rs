//! CLI binary for svg2pdf-batch.
//!
//! A thin shim over the library crate that maps CLI flags to `BatchConfig`
//! and prints results.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use svg2pdf_batch::{
    convert_batch, convert_tree, BatchConfig, ConsoleProgress, ProgressCallback,
};
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Convert every SVG under the current directory with Inkscape
  svg2pdf inkscape

  # Explicit file list
  svg2pdf inkscape figs/a.svg figs/b.svg

  # Limit the worker pool to 2 converter processes
  svg2pdf -j 2 inkscape

  # Re-render everything, ignoring up-to-date PDFs
  svg2pdf --force inkscape

  # Pass tool-specific flags through to every invocation
  svg2pdf inkscape --extra-arg=--export-area-drawing

  # Machine-readable run report
  svg2pdf --json inkscape > report.json

OUTPUT PROTOCOL (stdout, one line per file, interleaved across workers):
  Skipped: <input>                      output PDF already newer
  Rendering: <input> -> <output>        converter started
  Rendered: <input> -> <output>         converter exited

  Failures print `Failed: <input> -> <output>: <reason>` on stderr and the
  process exits 1 when any file failed.

CONVERTER CONTRACT:
  The converter is invoked as `<cmd> <input.svg> --export-filename=<output.pdf>`
  and must write the PDF itself. Inkscape 1.x satisfies this out of the box.

ENVIRONMENT VARIABLES:
  SVG2PDF_JOBS       Worker-pool size (same as --jobs)
  RUST_LOG           Tracing filter override (e.g. svg2pdf_batch=debug)
"#;

/// Batch-convert SVG files to PDF through an external renderer.
#[derive(Parser, Debug)]
#[command(
    name = "svg2pdf",
    version,
    about = "Batch-convert SVG files to PDF through an external renderer",
    long_about = "Batch-convert SVG files to PDF by invoking an external renderer (such as \
Inkscape) once per file, parallelized across a bounded pool of worker processes. Files whose \
PDF is already newer than the SVG are skipped.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Converter executable (e.g. inkscape).
    command: String,

    /// Explicit SVG files to consider. When omitted, the current directory
    /// is searched recursively.
    files: Vec<PathBuf>,

    /// Worker-pool size (concurrent converter processes).
    #[arg(
        short,
        long,
        env = "SVG2PDF_JOBS",
        long_help = "Number of converter processes run concurrently.\n\
          Defaults to the available hardware parallelism."
    )]
    jobs: Option<usize>,

    /// Re-render even when the output PDF is newer than the input.
    #[arg(long)]
    force: bool,

    /// Extra argument appended to every converter invocation (repeatable).
    #[arg(long = "extra-arg", value_name = "ARG")]
    extra_args: Vec<String>,

    /// Output the structured run report (BatchOutput) as JSON instead of
    /// status lines.
    #[arg(long)]
    json: bool,

    /// Suppress status lines and the summary; errors still print.
    #[arg(short, long)]
    quiet: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // Status lines on stdout are the user-facing surface; library logs stay
    // on stderr and default to warnings unless --verbose.
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Build config ─────────────────────────────────────────────────────
    let line_output = !cli.quiet && !cli.json;
    let mut builder = BatchConfig::builder()
        .command(&cli.command)
        .force(cli.force)
        .extra_args(cli.extra_args.iter().cloned());
    if let Some(jobs) = cli.jobs {
        builder = builder.jobs(jobs);
    }
    if line_output {
        let cb: ProgressCallback = Arc::new(ConsoleProgress);
        builder = builder.progress(cb);
    }
    let config = builder.build().context("Invalid configuration")?;

    // ── Run batch ────────────────────────────────────────────────────────
    let output = if cli.files.is_empty() {
        convert_tree(".", &config).await
    } else {
        convert_batch(cli.files.clone(), &config).await
    }
    .context("Batch conversion failed")?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&output).context("Failed to serialise run report")?
        );
    } else if !cli.quiet {
        eprintln!(
            "{} rendered, {} skipped, {} failed in {}ms",
            output.stats.rendered,
            output.stats.skipped,
            output.stats.failed,
            output.stats.total_duration_ms,
        );
    }

    if !output.is_clean() {
        std::process::exit(1);
    }
    Ok(())
}
