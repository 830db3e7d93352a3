//! # Irisctl Setup Command (environment-file provisioner)
//!
//! File: cli/src/commands/setup/mod.rs
//!
//! ## Overview
//!
//! This module implements `irisctl setup`, which copies the distributed
//! environment templates into place as active config files for either the
//! local or the production deployment. It is the only entry point that
//! touches the filesystem and the only one that does not talk to the
//! container engine.
//!
//! ## Architecture
//!
//! The command flow is a flat sequence:
//! 1. Parse the optional positional mode (`local`, the default, or
//!    `production`) as a `clap::ValueEnum`.
//! 2. Load the configuration to get the two template/target pairs for the
//!    chosen mode (backend and frontend).
//! 3. For each pair, independently: skip with a red "not found" line if the
//!    template is absent, skip with a yellow "already exists" line if the
//!    target is present (an active config is never overwritten), otherwise
//!    copy the template byte-for-byte and print a green "Created" line.
//! 4. Print the mode-appropriate next-steps block.
//!
//! No per-pair outcome is fatal and no outcome aborts the remaining pairs;
//! the provisioner always completes and exits 0. Only a real I/O failure on
//! an attempted copy propagates as an error.
//!
//! ## Usage
//!
//! ```bash
//! # Provision local development env files (the default)
//! irisctl setup
//!
//! # Provision production env files
//! irisctl setup production
//! ```
//!
use crate::{
    common::ui,
    core::{
        config::{self, Config, EnvFilePair},
        error::{IrisctlError, Result},
    },
};
use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::{fs, path::Path};
use tracing::{debug, info};

/// Which deployment the provisioned env files are for.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Local development stack (`.env.local` files).
    Local,
    /// Production stack (`.env` / `.env.production` files).
    Production,
}

/// Outcome of provisioning a single template/target pair.
#[derive(Debug, PartialEq, Eq)]
enum Provision {
    /// Target was created from the template.
    Created,
    /// Target already existed and was left untouched.
    AlreadyExists,
    /// Template file was missing; nothing was written.
    TemplateMissing,
}

/// # Setup Arguments (`SetupArgs`)
///
/// Command-line arguments for `irisctl setup`.
#[derive(Parser, Debug)]
#[command(about = "Copy environment templates into place for local or production")]
pub struct SetupArgs {
    /// Deployment mode to provision for. Omitting it means local.
    #[arg(value_enum, default_value_t = Mode::Local)]
    mode: Mode,
}

/// # Handle Setup Command (`handle_setup`)
///
/// Provisions the env-file pairs for the requested mode and prints the
/// next-steps summary. Always completes: a missing template or an existing
/// target is reported and skipped, never treated as a failure of the run.
pub async fn handle_setup(args: SetupArgs) -> Result<()> {
    info!("Handling setup command...");
    debug!("Setup args: {:?}", args);

    let cfg = config::load_config().context("Failed to load irisctl configuration")?;

    match args.mode {
        Mode::Local => println!("🔧 Setting up local development environment files..."),
        Mode::Production => println!("🔧 Setting up production environment files..."),
    }

    let pairs = pairs_for_mode(&cfg, args.mode);
    for pair in pairs {
        // Each pair is handled independently; earlier outcomes never gate
        // later pairs.
        provision_pair(pair)?;
    }

    print_next_steps(&cfg, args.mode);
    Ok(())
}

/// The template/target pairs configured for the given mode.
fn pairs_for_mode(cfg: &Config, mode: Mode) -> &[EnvFilePair] {
    match mode {
        Mode::Local => &cfg.env_files.local,
        Mode::Production => &cfg.env_files.production,
    }
}

/// Provisions one template/target pair.
///
/// The target is never overwritten: an existing active config file holds
/// real credentials the user has edited, and clobbering it would be far
/// worse than a stale copy. Returns the outcome so callers (and tests) can
/// distinguish the three paths.
fn provision_pair(pair: &EnvFilePair) -> Result<Provision> {
    let template = Path::new(&pair.template);
    let target = Path::new(&pair.target);

    if !template.exists() {
        ui::fail(&format!("{} not found", pair.template));
        return Ok(Provision::TemplateMissing);
    }
    if target.exists() {
        ui::warn(&format!("{} already exists", pair.target));
        return Ok(Provision::AlreadyExists);
    }

    fs::copy(template, target).map_err(|e| {
        anyhow::anyhow!(IrisctlError::FileSystem(format!(
            "Failed to copy {} to {}: {}",
            template.display(),
            target.display(),
            e
        )))
    })?;
    info!("Created {} from {}", pair.target, pair.template);
    ui::success(&format!("Created {}", pair.target));
    Ok(Provision::Created)
}

/// Prints the mode-appropriate guidance for what to do after provisioning.
fn print_next_steps(cfg: &Config, mode: Mode) {
    println!("\n🔧 Next steps:");
    for (i, pair) in pairs_for_mode(cfg, mode).iter().enumerate() {
        println!(
            "{}. Edit {} with your Supabase credentials and API keys",
            i + 1,
            pair.target
        );
    }
    let step = pairs_for_mode(cfg, mode).len() + 1;
    match mode {
        Mode::Local => println!(
            "{}. Run 'irisctl local' to start the development environment",
            step
        ),
        Mode::Production => println!(
            "{}. Run 'irisctl rebuild' to build and start the production environment",
            step
        ),
    }
}
