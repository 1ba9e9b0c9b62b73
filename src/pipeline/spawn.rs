//! External converter invocation.
//!
//! The converter contract is Inkscape's CLI shape:
//!
//! ```text
//! <command> <input.svg> --export-filename=<output.pdf> [extra args…]
//! ```
//!
//! Exit classification preserves the batch's long-standing quirk: any real
//! exit code — nonzero included — counts as a successful render. Only a
//! process that never produced an exit code (killed by a signal) is a
//! failure, and that failure stays contained to its own file.

use crate::error::{BatchError, FileError};
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use tokio::process::{Child, Command};
use tracing::debug;

/// Spawn the converter for one input/output pair.
///
/// The child inherits stdout/stderr so converter diagnostics reach the
/// terminal; stdin is closed so a converter that prompts fails fast instead
/// of hanging the pool. A spawn error is fatal: it means the command itself
/// is unusable and every sibling job would fail the same way.
pub fn spawn_converter(
    command: &str,
    extra_args: &[String],
    input: &Path,
    output: &Path,
) -> Result<Child, BatchError> {
    let mut cmd = Command::new(command);
    cmd.arg(input)
        .arg(format!("--export-filename={}", output.display()))
        .args(extra_args)
        .stdin(Stdio::null());

    debug!(command, input = %input.display(), "spawning converter");
    cmd.spawn().map_err(|source| BatchError::SpawnFailed {
        command: command.to_string(),
        input: input.to_path_buf(),
        source,
    })
}

/// Await the converter's exit and classify it for `input`.
pub async fn wait_converter(mut child: Child, input: &Path) -> Result<(), FileError> {
    let status = child.wait().await.map_err(|e| FileError::WaitFailed {
        input: input.to_path_buf(),
        detail: e.to_string(),
    })?;
    classify_exit(status, input)
}

/// Map an [`ExitStatus`] to the per-file outcome.
///
/// `code()` returns `None` exactly when the process was terminated by a
/// signal, the moral equivalent of a negative returncode from `waitpid`.
fn classify_exit(status: ExitStatus, input: &Path) -> Result<(), FileError> {
    match status.code() {
        Some(code) => {
            if code != 0 {
                debug!(input = %input.display(), code, "converter exited nonzero");
            }
            Ok(())
        }
        None => Err(FileError::Terminated {
            input: input.to_path_buf(),
            signal: termination_signal(&status),
        }),
    }
}

#[cfg(unix)]
fn termination_signal(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn termination_signal(_status: &ExitStatus) -> Option<i32> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[cfg(unix)]
    fn status_from_raw(raw: i32) -> ExitStatus {
        use std::os::unix::process::ExitStatusExt;
        ExitStatus::from_raw(raw)
    }

    #[cfg(unix)]
    #[test]
    fn zero_exit_is_success() {
        assert!(classify_exit(status_from_raw(0), Path::new("a.svg")).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_still_counts_as_rendered() {
        // wait(2) encoding: exit code lives in the high byte.
        assert!(classify_exit(status_from_raw(3 << 8), Path::new("a.svg")).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn signal_termination_is_a_file_error() {
        // Low byte = signal number, SIGKILL here.
        let err = classify_exit(status_from_raw(9), Path::new("a.svg")).unwrap_err();
        match err {
            FileError::Terminated { input, signal } => {
                assert_eq!(input, PathBuf::from("a.svg"));
                assert_eq!(signal, Some(9));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn spawn_failure_is_fatal_and_names_the_command() {
        let err = spawn_converter(
            "definitely-not-a-real-converter-9z",
            &[],
            Path::new("a.svg"),
            Path::new("a.pdf"),
        )
        .unwrap_err();
        match err {
            BatchError::SpawnFailed { command, .. } => {
                assert!(command.contains("definitely-not-a-real-converter"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
