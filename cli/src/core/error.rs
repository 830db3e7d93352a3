//! # Irisctl Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout irisctl. It provides a
//! consistent approach to error management: a small custom enum for the error
//! taxonomy the CLI actually distinguishes, plus a flexible `anyhow`-based
//! `Result` alias for everything else.
//!
//! ## Architecture
//!
//! The error system consists of two components:
//! - `IrisctlError`: a custom error enum using `thiserror` for specific error types
//! - `Result<T>`: a type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The variants cover the failure modes of a thin compose wrapper:
//! - Configuration errors (bad `.irisctl.toml`)
//! - Filesystem errors (provisioner copy failures)
//! - Engine unavailable (the availability probe failed)
//! - External command failures (a compose invocation exited non-zero)
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if !available {
//!     anyhow::bail!(IrisctlError::EngineUnavailable { program: "docker".into() });
//! }
//!
//! // Add context to errors using anyhow
//! let copied = fs::copy(&template, &target)
//!     .with_context(|| format!("Failed to copy {} to {}", template.display(), target.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the irisctl application.
#[derive(Error, Debug)]
pub enum IrisctlError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    /// The container engine's version probe failed: the executable is missing
    /// or the daemon is not responding. Nothing else is attempted after this.
    #[error("Container engine '{program}' is not running or not installed.")]
    EngineUnavailable { program: String },

    /// An orchestration command ran but exited non-zero (or was killed by a
    /// signal). `status` is the human-readable exit description.
    #[error("External command failed: {cmd} (status: {status})")]
    ExternalCommand { cmd: String, status: String },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_err = IrisctlError::Config("Missing setting 'engine.program'".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: Missing setting 'engine.program'"
        );

        let unavailable = IrisctlError::EngineUnavailable {
            program: "docker".into(),
        };
        assert_eq!(
            unavailable.to_string(),
            "Container engine 'docker' is not running or not installed."
        );

        let cmd_failed = IrisctlError::ExternalCommand {
            cmd: "docker compose down".into(),
            status: "exit code 1".into(),
        };
        assert_eq!(
            cmd_failed.to_string(),
            "External command failed: docker compose down (status: exit code 1)"
        );
    }
}
