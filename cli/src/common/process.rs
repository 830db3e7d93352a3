//! # Irisctl Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//!
//! ## Overview
//!
//! This module provides the subprocess layer every lifecycle command is built
//! on: robust wrappers around `tokio::process::Command` for executing the
//! container engine.
//!
//! ## Architecture
//!
//! Two execution styles cover everything irisctl needs:
//!
//! - **Streaming** (`run_streamed`): the child inherits stdin/stdout/stderr
//!   and the caller blocks until it exits. Used for `up`, `down`, `build`,
//!   `restart`, and the long-lived `logs -f` follow (which runs until the
//!   child terminates or the user interrupts it).
//! - **Capturing** (`run_captured`): stdout/stderr are collected and returned.
//!   Used for the availability probe (`<engine> version`) and the running-
//!   stack check (`ps -q`). Returns the raw `io::Result` so callers can
//!   distinguish a missing executable (`ErrorKind::NotFound`) from other
//!   launch failures.
//!
//! Exit statuses are never swallowed: `ensure_success` maps a non-zero exit
//! into `IrisctlError::ExternalCommand`, and callers decide whether to
//! propagate (`?`) or collect (the production rebuild runs every step
//! regardless of earlier failures).
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::process;
//!
//! # async fn run_example() -> crate::core::error::Result<()> {
//! let args = ["compose", "-f", "docker-compose.local.yml", "down"];
//! let rendered = process::render_command("docker", &args);
//! let status = process::run_streamed("docker", &args).await?;
//! process::ensure_success(&rendered, status)?;
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{IrisctlError, Result};
use anyhow::Context;
use std::process::{ExitStatus, Output};
use tokio::process::Command;
use tracing::debug;

/// Runs an external command with inherited stdio and waits for it to exit.
///
/// The child writes directly to the caller's terminal, so build output,
/// compose progress, and followed logs appear in real time. Blocks (at the
/// task level) until the child exits.
///
/// # Arguments
///
/// * `program` - Executable name or path.
/// * `args` - Full argument vector.
///
/// # Returns
///
/// * `Result<ExitStatus>` - The child's exit status. A non-zero status is
///   *not* an error at this layer; see [`ensure_success`].
///
/// # Errors
///
/// Returns an `Err` only if the child could not be launched at all (missing
/// executable, permission denied).
pub async fn run_streamed<S: AsRef<str>>(program: &str, args: &[S]) -> Result<ExitStatus> {
    let rendered = render_command(program, args);
    debug!("Running (streamed): {}", rendered);
    let status = Command::new(program)
        .args(args.iter().map(|a| a.as_ref()))
        .status()
        .await
        .with_context(|| format!("Failed to launch external command: {}", rendered))?;
    debug!("Command finished: {} ({})", rendered, describe_status(status));
    Ok(status)
}

/// Runs an external command with stdout and stderr captured.
///
/// Returns the raw `io::Result` from the spawn so the caller can inspect
/// `ErrorKind::NotFound` (executable missing), which the availability probe
/// treats as "engine unavailable" rather than a hard error.
pub async fn run_captured<S: AsRef<str>>(program: &str, args: &[S]) -> std::io::Result<Output> {
    let rendered = render_command(program, args);
    debug!("Running (captured): {}", rendered);
    Command::new(program)
        .args(args.iter().map(|a| a.as_ref()))
        .output()
        .await
}

/// Maps a non-success exit status into `IrisctlError::ExternalCommand`.
///
/// `cmd` is the human-readable rendering of the invocation, used verbatim in
/// the error message.
pub fn ensure_success(cmd: &str, status: ExitStatus) -> Result<()> {
    if status.success() {
        Ok(())
    } else {
        anyhow::bail!(IrisctlError::ExternalCommand {
            cmd: cmd.to_string(),
            status: describe_status(status),
        })
    }
}

/// Renders a program + argument vector as a single human-readable string for
/// logs and error messages.
pub fn render_command<S: AsRef<str>>(program: &str, args: &[S]) -> String {
    let mut rendered = String::from(program);
    for arg in args {
        rendered.push(' ');
        rendered.push_str(arg.as_ref());
    }
    rendered
}

/// Human-readable description of an exit status ("exit code 1", or the signal
/// description when there is no code).
fn describe_status(status: ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exit code {}", code),
        None => status.to_string(), // killed by signal on unix
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_command() {
        let rendered = render_command(
            "docker",
            &["compose", "-f", "docker-compose.local.yml", "up", "-d"],
        );
        assert_eq!(rendered, "docker compose -f docker-compose.local.yml up -d");
    }

    #[test]
    fn test_render_command_no_args() {
        let args: [&str; 0] = [];
        assert_eq!(render_command("docker", &args), "docker");
    }

    #[cfg(unix)]
    #[test]
    fn test_ensure_success_maps_nonzero_exit() {
        use std::os::unix::process::ExitStatusExt;
        // Raw wait status 0x100 is exit code 1.
        let status = ExitStatus::from_raw(0x100);
        let err = ensure_success("docker compose down", status)
            .expect_err("non-zero exit should be an error");
        let cmd_err = err
            .downcast_ref::<IrisctlError>()
            .expect("should be an IrisctlError");
        assert!(matches!(cmd_err, IrisctlError::ExternalCommand { .. }));
        assert!(err.to_string().contains("docker compose down"));
    }

    #[cfg(unix)]
    #[test]
    fn test_ensure_success_passes_zero_exit() {
        use std::os::unix::process::ExitStatusExt;
        let status = ExitStatus::from_raw(0);
        assert!(ensure_success("docker version", status).is_ok());
    }

    /// Capturing a command that exists must yield its stdout.
    #[tokio::test]
    async fn test_run_captured_collects_stdout() {
        let output = run_captured("echo", &["hello"])
            .await
            .expect("echo should launch");
        assert!(output.status.success());
        assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "hello");
    }

    /// A missing executable surfaces as io::ErrorKind::NotFound, which the
    /// availability probe relies on.
    #[tokio::test]
    async fn test_run_captured_missing_program() {
        let args: [&str; 0] = [];
        let err = run_captured("definitely-not-a-real-binary-irisctl", &args)
            .await
            .expect_err("missing program should fail to spawn");
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
