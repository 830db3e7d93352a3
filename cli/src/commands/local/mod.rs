//! # Irisctl Local Lifecycle Dispatcher
//!
//! File: cli/src/commands/local/mod.rs
//!
//! ## Overview
//!
//! This module implements `irisctl local`, the lifecycle dispatcher for the
//! local development stack defined by `docker-compose.local.yml`. A single
//! optional positional action selects the subprocess sequence; omitting it
//! means `start`.
//!
//! ## Architecture
//!
//! The command flow:
//! 1. Parse the optional `Action` (`start|stop|restart|logs`). Unknown
//!    actions are a usage error; the historical behavior of silently falling
//!    through to `start` was judged a latent bug and deliberately dropped.
//! 2. Load configuration and build the local `ComposeRunner`.
//! 3. Run the availability probe; if the engine is unreachable the command
//!    aborts here with no further side effects.
//! 4. Dispatch:
//!    - `start`: query `ps -q` first and refuse to start a duplicate stack;
//!      otherwise `up -d` and print the access URLs.
//!    - `stop`: `down`.
//!    - `restart`: `down` then `up -d`, unconditionally (no pre-check).
//!    - `logs`: `logs -f`, streaming in the foreground until interrupted.
//!
//! A non-zero exit from any issued compose command propagates as an error
//! (the old shell scripts ignored child exit codes; irisctl does not).
//! The "already running" refusal is a warning, not an error: the desired
//! state is already in place, so the command exits 0.
//!
//! ## Usage
//!
//! ```bash
//! irisctl local            # same as `irisctl local start`
//! irisctl local stop
//! irisctl local restart
//! irisctl local logs       # Ctrl-C to stop following
//! ```
//!
use crate::{
    common::{compose::ComposeRunner, ui},
    core::{
        config::{self, Config},
        error::Result,
    },
};
use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::{debug, info, warn};

/// Lifecycle action for the local development stack.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Bring the stack up in the background (refuses a duplicate start).
    Start,
    /// Bring the stack down.
    Stop,
    /// Bring the stack down and straight back up, without a pre-check.
    Restart,
    /// Follow logs from all services until interrupted.
    Logs,
}

/// # Local Arguments (`LocalArgs`)
///
/// Command-line arguments for `irisctl local`.
#[derive(Parser, Debug)]
#[command(about = "Manage the Iris local development environment")]
pub struct LocalArgs {
    /// Lifecycle action to perform. Omitting it means start.
    #[arg(value_enum, default_value_t = Action::Start)]
    action: Action,
}

/// # Handle Local Command (`handle_local`)
///
/// Probes the engine, then dispatches on the requested action. Every branch
/// issues at most two orchestration commands; there are no retries and no
/// timeouts (the `logs` child is expected to outlive the caller's patience,
/// not a deadline).
pub async fn handle_local(args: LocalArgs) -> Result<()> {
    info!("Handling local command...");
    debug!("Local args: {:?}", args);

    let cfg = config::load_config().context("Failed to load irisctl configuration")?;
    let runner = ComposeRunner::local(&cfg);

    // Gate everything on the availability probe; nothing below runs when the
    // engine is unreachable.
    runner.ensure_engine_available().await?;

    match args.action {
        Action::Start => start(&cfg, &runner).await,
        Action::Stop => stop(&runner).await,
        Action::Restart => restart(&cfg, &runner).await,
        Action::Logs => logs(&runner).await,
    }
}

/// `start`: duplicate-guarded `up -d`.
async fn start(cfg: &Config, runner: &ComposeRunner) -> Result<()> {
    if runner.has_running_containers().await? {
        // The stack is already up; starting again would double-manage the
        // same containers. Warn and leave it alone.
        warn!("Local stack already has running containers; refusing duplicate start.");
        ui::warn("Local development environment is already running.");
        ui::hint("Use 'irisctl local stop' to stop it first.");
        return Ok(());
    }

    ui::step("Starting local development environment...");
    runner.up_detached().await?;
    ui::success("Local development environment started.");
    print_access_urls(cfg);
    Ok(())
}

/// `stop`: a single `down`.
async fn stop(runner: &ComposeRunner) -> Result<()> {
    ui::step("Stopping local development environment...");
    runner.down().await?;
    ui::success("Local development environment stopped.");
    Ok(())
}

/// `restart`: `down` then `up -d`, no pre-check.
async fn restart(cfg: &Config, runner: &ComposeRunner) -> Result<()> {
    ui::step("Restarting local development environment...");
    runner.down().await?;
    runner.up_detached().await?;
    ui::success("Local development environment restarted.");
    ui::hint(&format!("🌐 Access Iris at: {}", cfg.local.app_url));
    Ok(())
}

/// `logs`: foreground follow, blocking until the child terminates.
async fn logs(runner: &ComposeRunner) -> Result<()> {
    ui::step("Showing logs from local development environment...");
    runner.follow_logs().await
}

/// The three access URLs printed after a fresh start.
fn print_access_urls(cfg: &Config) {
    ui::hint(&format!("🌐 Access Iris at: {}", cfg.local.app_url));
    ui::hint(&format!("📊 Backend API at: {}", cfg.local.api_url));
    ui::hint(&format!("❤️  Health check at: {}", cfg.local.health_url));
}
