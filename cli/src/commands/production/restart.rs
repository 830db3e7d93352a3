//! # Irisctl Production Restart Handler
//!
//! File: cli/src/commands/production/restart.rs
//!
//! ## Overview
//!
//! This module implements `irisctl restart`: a single unconditional
//! `compose restart` of all production services, for picking up env-file
//! edits without rebuilding images.
//!
//! Unlike `rebuild` there is only one step, so a non-zero exit from the
//! engine simply propagates: the command fails and no success line or access
//! URL is printed for a restart that did not happen.
//!
//! ## Usage
//!
//! ```bash
//! irisctl restart
//! ```
//!
use crate::{
    common::{compose::ComposeRunner, ui},
    core::{config, error::Result},
};
use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

/// # Restart Arguments (`RestartArgs`)
///
/// `irisctl restart` takes no arguments beyond `--help`.
#[derive(Parser, Debug)]
#[command(about = "Restart all production services in place")]
pub struct RestartArgs {}

/// # Handle Restart Command (`handle_restart`)
///
/// Probes the engine, issues `compose restart`, and confirms with the
/// production URL on success.
pub async fn handle_restart(args: RestartArgs) -> Result<()> {
    info!("Handling restart command...");
    debug!("Restart args: {:?}", args);

    let cfg = config::load_config().context("Failed to load irisctl configuration")?;
    let runner = ComposeRunner::production(&cfg);

    runner.ensure_engine_available().await?;

    ui::step("Restarting production environment...");
    let targets: Vec<&str> = cfg
        .env_files
        .production
        .iter()
        .map(|pair| pair.target.as_str())
        .collect();
    ui::hint(&format!("Using {}", targets.join(" and ")));

    runner.restart_services().await?;

    ui::success("Production environment restarted.");
    ui::hint(&format!("🌐 Access Iris at: {}", cfg.production.app_url));
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    /// `irisctl restart` accepts no positional arguments.
    #[test]
    fn test_restart_args_parsing() {
        assert!(RestartArgs::try_parse_from(["restart"]).is_ok());
        assert!(RestartArgs::try_parse_from(["restart", "all"]).is_err());
    }
}
