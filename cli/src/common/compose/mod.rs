//! # Irisctl Compose Invocation Layer (`common::compose`)
//!
//! File: cli/src/common/compose/mod.rs
//!
//! ## Overview
//!
//! This module owns every interaction with the container engine. It provides
//! the `ComposeRunner`, a small value resolved once from configuration and
//! threaded explicitly into each handler, which knows:
//!
//! - how to invoke the engine (`engine.program`, `engine.compose_command`),
//! - which compose definition file to name (`-f <file>` for the local stack,
//!   nothing for production, which relies on the engine's own default
//!   `docker-compose.yml` resolution),
//! - the fixed argument vector for every lifecycle operation.
//!
//! ## Architecture
//!
//! - `engine_available` / `ensure_engine_available`: the availability probe.
//!   Runs `<engine> version` with captured output; a zero exit means
//!   available, while a non-zero exit or a missing executable means
//!   unavailable. The `ensure_` variant prints the standard guidance and
//!   returns `IrisctlError::EngineUnavailable`, so a handler that calls it
//!   first performs no side effects when the engine is down.
//! - `up_detached` / `down` / `build_images` / `restart_services` /
//!   `follow_logs`: streamed invocations. Non-zero exits are mapped to
//!   `IrisctlError::ExternalCommand` and propagate to the caller.
//! - `has_running_containers`: the duplicate-run guard. Captures
//!   `compose ps -q` and reports whether any container ID came back.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::compose::ComposeRunner;
//!
//! # async fn run_example(cfg: &crate::core::config::Config) -> crate::core::error::Result<()> {
//! let runner = ComposeRunner::local(cfg);
//! runner.ensure_engine_available().await?;
//! if !runner.has_running_containers().await? {
//!     runner.up_detached().await?;
//! }
//! # Ok(())
//! # }
//! ```
//!
use crate::{
    common::{process, ui},
    core::{
        config::Config,
        error::{IrisctlError, Result},
    },
};
use anyhow::Context;
use tracing::{debug, warn};

/// Resolved invocation of the container engine against one compose stack.
///
/// Holds the engine program, the compose subcommand, and the optional compose
/// definition file. Constructed once per command from the loaded
/// configuration; handlers never assemble engine argument vectors themselves.
#[derive(Debug, Clone)]
pub struct ComposeRunner {
    /// Engine executable (default `docker`).
    program: String,
    /// Compose plugin subcommand (default `compose`).
    compose_command: String,
    /// Compose definition file passed via `-f`, if the stack names one.
    compose_file: Option<String>,
}

impl ComposeRunner {
    /// Runner for the local development stack, which always names its compose
    /// file explicitly.
    pub fn local(cfg: &Config) -> Self {
        Self {
            program: cfg.engine.program.clone(),
            compose_command: cfg.engine.compose_command.clone(),
            compose_file: Some(cfg.local.compose_file.clone()),
        }
    }

    /// Runner for the production stack, which relies on the engine's default
    /// compose file resolution.
    pub fn production(cfg: &Config) -> Self {
        Self {
            program: cfg.engine.program.clone(),
            compose_command: cfg.engine.compose_command.clone(),
            compose_file: None,
        }
    }

    /// Builds the full argument vector for one compose operation:
    /// `<compose_command> [-f <file>] <operation...>`.
    fn compose_args(&self, operation: &[&str]) -> Vec<String> {
        let mut args = Vec::with_capacity(operation.len() + 3);
        args.push(self.compose_command.clone());
        if let Some(file) = &self.compose_file {
            args.push("-f".to_string());
            args.push(file.clone());
        }
        args.extend(operation.iter().map(|s| s.to_string()));
        args
    }

    /// Runs one streamed compose operation and maps a non-zero exit into
    /// `IrisctlError::ExternalCommand`.
    async fn run_checked(&self, operation: &[&str]) -> Result<()> {
        let args = self.compose_args(operation);
        let rendered = process::render_command(&self.program, &args);
        let status = process::run_streamed(&self.program, &args).await?;
        process::ensure_success(&rendered, status)
    }

    // --- Availability probe ---

    /// Probes the engine by running `<engine> version` with captured output.
    ///
    /// Returns `Ok(true)` on a zero exit. A non-zero exit (daemon not
    /// responding) or a missing executable both report `Ok(false)`; only an
    /// unexpected launch failure is an `Err`.
    pub async fn engine_available(&self) -> Result<bool> {
        match process::run_captured(&self.program, &["version"]).await {
            Ok(output) if output.status.success() => Ok(true),
            Ok(output) => {
                debug!(
                    "Engine probe '{} version' failed: {}",
                    self.program,
                    String::from_utf8_lossy(&output.stderr).trim()
                );
                Ok(false)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Engine executable '{}' not found on PATH.", self.program);
                Ok(false)
            }
            Err(e) => Err(e).with_context(|| {
                format!("Failed to run availability probe '{} version'", self.program)
            }),
        }
    }

    /// Gate used by every lifecycle handler: probes the engine and, if it is
    /// unavailable, prints the standard guidance and returns
    /// `IrisctlError::EngineUnavailable`. No orchestration command is ever
    /// issued after a failed probe.
    pub async fn ensure_engine_available(&self) -> Result<()> {
        if self.engine_available().await? {
            return Ok(());
        }
        warn!("Container engine '{}' unavailable; aborting.", self.program);
        ui::fail("Docker is not running or not installed.");
        ui::warn("Please start Docker and try again.");
        anyhow::bail!(IrisctlError::EngineUnavailable {
            program: self.program.clone(),
        })
    }

    // --- Lifecycle operations ---

    /// `compose [-f <file>] up -d`: brings the stack up in the background.
    pub async fn up_detached(&self) -> Result<()> {
        self.run_checked(&["up", "-d"]).await
    }

    /// `compose [-f <file>] down`: brings the stack down.
    pub async fn down(&self) -> Result<()> {
        self.run_checked(&["down"]).await
    }

    /// `compose [-f <file>] build`: rebuilds the stack's images.
    pub async fn build_images(&self) -> Result<()> {
        self.run_checked(&["build"]).await
    }

    /// `compose [-f <file>] restart`: restarts all services in place.
    pub async fn restart_services(&self) -> Result<()> {
        self.run_checked(&["restart"]).await
    }

    /// `compose [-f <file>] logs -f`: follows logs in the foreground until
    /// the child exits or the user interrupts it.
    pub async fn follow_logs(&self) -> Result<()> {
        self.run_checked(&["logs", "-f"]).await
    }

    // --- Stack inspection ---

    /// Reports whether the stack has any running containers, by capturing
    /// `compose ps -q` and checking for any non-blank container ID.
    pub async fn has_running_containers(&self) -> Result<bool> {
        Ok(!self.running_container_ids().await?.is_empty())
    }

    /// Captures `compose ps -q` and returns the container IDs it printed.
    ///
    /// A non-zero exit from `ps` is treated as "no running containers" (the
    /// stack may simply not exist yet); the stderr is logged at debug level.
    pub async fn running_container_ids(&self) -> Result<Vec<String>> {
        let args = self.compose_args(&["ps", "-q"]);
        let rendered = process::render_command(&self.program, &args);
        let output = process::run_captured(&self.program, &args)
            .await
            .with_context(|| format!("Failed to run '{}'", rendered))?;
        if !output.status.success() {
            debug!(
                "'{}' exited non-zero: {}",
                rendered,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Ok(parse_container_ids(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// Extracts container IDs from `ps -q` output: one ID per non-blank line.
fn parse_container_ids(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;

    /// The local runner must name its compose file on every operation; the
    /// production runner must not.
    #[test]
    fn test_compose_args_local_vs_production() {
        let cfg = Config::default();

        let local = ComposeRunner::local(&cfg);
        assert_eq!(
            local.compose_args(&["up", "-d"]),
            vec!["compose", "-f", "docker-compose.local.yml", "up", "-d"]
        );

        let production = ComposeRunner::production(&cfg);
        assert_eq!(
            production.compose_args(&["build"]),
            vec!["compose", "build"]
        );
    }

    #[test]
    fn test_compose_args_respects_engine_overrides() {
        let toml_str = r#"
            [engine]
            program = "podman"
            compose_command = "compose"

            [local]
            compose_file = "compose/dev.yml"
        "#;
        let cfg: Config = toml::from_str(toml_str).expect("config should parse");
        let runner = ComposeRunner::local(&cfg);
        assert_eq!(runner.program, "podman");
        assert_eq!(
            runner.compose_args(&["ps", "-q"]),
            vec!["compose", "-f", "compose/dev.yml", "ps", "-q"]
        );
    }

    #[test]
    fn test_parse_container_ids() {
        assert!(parse_container_ids("").is_empty());
        assert!(parse_container_ids("\n  \n").is_empty());
        assert_eq!(
            parse_container_ids("abc123\ndef456\n"),
            vec!["abc123", "def456"]
        );
        // Trailing whitespace from the engine is tolerated.
        assert_eq!(parse_container_ids("  abc123  \n"), vec!["abc123"]);
    }

    /// Probing a nonexistent engine binary reports unavailable rather than
    /// erroring, which is what gates the lifecycle commands.
    #[tokio::test]
    async fn test_engine_available_missing_binary() {
        let toml_str = r#"
            [engine]
            program = "irisctl-test-no-such-engine"
        "#;
        let cfg: Config = toml::from_str(toml_str).expect("config should parse");
        let runner = ComposeRunner::local(&cfg);
        let available = runner
            .engine_available()
            .await
            .expect("probe itself should not error");
        assert!(!available);
    }
}
