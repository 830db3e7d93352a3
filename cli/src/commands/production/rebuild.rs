//! # Irisctl Production Rebuild Handler
//!
//! File: cli/src/commands/production/rebuild.rs
//!
//! ## Overview
//!
//! This module implements `irisctl rebuild`: the full production rebuild
//! sequence of `compose build`, `compose down`, `compose up -d`, in that
//! order, with no pre-checks and no duplicate-run guard.
//!
//! ## Architecture
//!
//! The three steps deliberately do **not** short-circuit: a failed build
//! still proceeds to `down` and `up`, matching the long-standing operational
//! contract of the deployment script this replaces (a broken build should
//! still restart the stack on the previous images). What irisctl adds is
//! honesty about the outcome: failed steps are collected, reported after the
//! sequence, and turn the final exit status non-zero. The access-URL
//! guidance is printed either way, since the stack may well be serving.
//!
//! ## Usage
//!
//! ```bash
//! irisctl rebuild
//! ```
//!
use crate::{
    common::{compose::ComposeRunner, ui},
    core::{config, error::Result},
};
use anyhow::Context;
use clap::Parser;
use tracing::{debug, info, warn};

/// # Rebuild Arguments (`RebuildArgs`)
///
/// `irisctl rebuild` takes no arguments beyond `--help`.
#[derive(Parser, Debug)]
#[command(about = "Rebuild and restart the production stack (build, down, up)")]
pub struct RebuildArgs {}

/// # Handle Rebuild Command (`handle_rebuild`)
///
/// Probes the engine, then runs the three-step rebuild sequence. Every step
/// runs regardless of the previous step's outcome; failures are reported at
/// the end and make the command exit non-zero.
pub async fn handle_rebuild(args: RebuildArgs) -> Result<()> {
    info!("Handling rebuild command...");
    debug!("Rebuild args: {:?}", args);

    let cfg = config::load_config().context("Failed to load irisctl configuration")?;
    let runner = ComposeRunner::production(&cfg);

    runner.ensure_engine_available().await?;

    ui::step("Rebuilding production environment...");
    print_env_file_note(&cfg);

    // No short-circuit between steps: record failures, keep going.
    let mut failed_steps: Vec<&str> = Vec::new();

    ui::substep("Step 1: Building images...");
    if let Err(e) = runner.build_images().await {
        warn!("Build step failed: {:#}", e);
        ui::fail(&format!("Build step failed: {}", e));
        failed_steps.push("build");
    }

    ui::substep("Step 2: Stopping services...");
    if let Err(e) = runner.down().await {
        warn!("Down step failed: {:#}", e);
        ui::fail(&format!("Stop step failed: {}", e));
        failed_steps.push("down");
    }

    ui::substep("Step 3: Starting services...");
    if let Err(e) = runner.up_detached().await {
        warn!("Up step failed: {:#}", e);
        ui::fail(&format!("Start step failed: {}", e));
        failed_steps.push("up");
    }

    if failed_steps.is_empty() {
        ui::success("Production environment rebuilt and started.");
    }
    // The stack may be serving on the old images even after a failed step, so
    // the access URL is printed unconditionally.
    ui::hint(&format!("🌐 Access Iris at: {}", cfg.production.app_url));

    if failed_steps.is_empty() {
        Ok(())
    } else {
        anyhow::bail!(
            "Rebuild finished with failed steps: {}",
            failed_steps.join(", ")
        )
    }
}

/// Reminds the operator which env files the production stack reads.
fn print_env_file_note(cfg: &config::Config) {
    let targets: Vec<&str> = cfg
        .env_files
        .production
        .iter()
        .map(|pair| pair.target.as_str())
        .collect();
    ui::hint(&format!("Using {}", targets.join(" and ")));
}
