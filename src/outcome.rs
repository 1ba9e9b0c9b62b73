//! Result types returned by a batch run.
//!
//! One [`FileReport`] per qualifying candidate, collected into a
//! [`BatchOutput`] alongside aggregate [`BatchStats`]. Everything here is
//! `Serialize` so the CLI's `--json` mode can emit the run verbatim.

use crate::error::FileError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What happened to one qualifying candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    /// Output already existed with a strictly newer mtime; converter never ran.
    Skipped,
    /// Converter exited with a real exit code (nonzero included).
    Rendered,
    /// Converter died abnormally; the error is contained to this file.
    Failed { error: FileError },
}

impl FileOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, FileOutcome::Rendered)
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, FileOutcome::Skipped)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FileOutcome::Failed { .. })
    }
}

/// Per-file record: the input/output pair and how the job ended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    /// Candidate SVG path as given (or discovered).
    pub input: PathBuf,
    /// Derived output path (`input` with a `pdf` extension).
    pub output: PathBuf,
    pub outcome: FileOutcome,
    /// Wall-clock time spent on this job, including the freshness check.
    pub duration_ms: u64,
}

/// Aggregate counters for one batch run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchStats {
    /// Qualifying candidates after the extension filter.
    pub candidates: usize,
    pub rendered: usize,
    pub skipped: usize,
    pub failed: usize,
    pub total_duration_ms: u64,
}

/// Everything a batch run produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchOutput {
    /// One report per qualifying candidate, sorted by input path.
    pub reports: Vec<FileReport>,
    pub stats: BatchStats,
}

impl BatchOutput {
    /// Iterate over the reports whose conversion failed.
    pub fn failures(&self) -> impl Iterator<Item = &FileReport> {
        self.reports.iter().filter(|r| r.outcome.is_failed())
    }

    /// True when every candidate either rendered or was skipped.
    pub fn is_clean(&self) -> bool {
        self.stats.failed == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(outcome: FileOutcome) -> FileReport {
        FileReport {
            input: PathBuf::from("a.svg"),
            output: PathBuf::from("a.pdf"),
            outcome,
            duration_ms: 5,
        }
    }

    #[test]
    fn outcome_predicates() {
        assert!(FileOutcome::Rendered.is_rendered());
        assert!(FileOutcome::Skipped.is_skipped());
        let failed = FileOutcome::Failed {
            error: FileError::Terminated {
                input: PathBuf::from("a.svg"),
                signal: None,
            },
        };
        assert!(failed.is_failed());
        assert!(!failed.is_rendered());
    }

    #[test]
    fn failures_filters_reports() {
        let out = BatchOutput {
            reports: vec![
                report(FileOutcome::Rendered),
                report(FileOutcome::Failed {
                    error: FileError::WaitFailed {
                        input: PathBuf::from("a.svg"),
                        detail: "broken pipe".into(),
                    },
                }),
                report(FileOutcome::Skipped),
            ],
            stats: BatchStats {
                candidates: 3,
                rendered: 1,
                skipped: 1,
                failed: 1,
                total_duration_ms: 12,
            },
        };
        assert_eq!(out.failures().count(), 1);
        assert!(!out.is_clean());
    }

    #[test]
    fn json_round_trip_keeps_status_tag() {
        let r = report(FileOutcome::Skipped);
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"status\":\"skipped\""), "got: {json}");
        let back: FileReport = serde_json::from_str(&json).unwrap();
        assert!(back.outcome.is_skipped());
    }
}
