//! # Irisctl Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file is the entry point for the `irisctl` binary, the deployment
//! convenience CLI for the Iris compose stacks. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the appropriate command handler
//!
//! ## Architecture
//!
//! Each of the four entry points (`setup`, `local`, `rebuild`, `restart`) is
//! a variant in the `Commands` enum, mapped to a handler function in its
//! module under `commands::`. All errors propagate to this level, where they
//! are printed once and turned into a non-zero exit.
//!
//! ## Examples
//!
//! ```bash
//! # Provision local env files, then start the local stack
//! irisctl setup
//! irisctl local
//!
//! # Follow logs with debug diagnostics on stderr
//! irisctl -vv local logs
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

// Declare the top-level modules of the CLI crate.
mod commands; // Entry-point logic (setup, local, production).
mod common; // Shared utilities (compose invocation, process, ui).
mod core; // Core infrastructure (errors, config).

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "irisctl",
    about = "Deployment convenience CLI for the Iris compose stacks",
    long_about = "Provision env files and manage the Iris local and production\n\
                  compose stacks through one consistent command-line surface.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase diagnostic verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Copy environment templates into place for local or production.
    Setup(commands::setup::SetupArgs),
    /// Manage the local development stack (start/stop/restart/logs).
    Local(commands::local::LocalArgs),
    /// Rebuild and restart the production stack (build, down, up).
    Rebuild(commands::production::rebuild::RebuildArgs),
    /// Restart all production services in place.
    Restart(commands::production::restart::RestartArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Diagnostics default to warnings only; user-facing status lines are
    // plain stdout and unaffected by the filter.
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Setup(args) => commands::setup::handle_setup(args).await,
        Commands::Local(args) => commands::local::handle_local(args).await,
        Commands::Rebuild(args) => commands::production::rebuild::handle_rebuild(args).await,
        Commands::Restart(args) => commands::production::restart::handle_restart(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

// --- Basic Integration Tests ---
#[cfg(test)]
mod tests {
    use assert_cmd::Command;
    use predicates::prelude::*;
    fn irisctl_cmd() -> Command {
        Command::cargo_bin("irisctl").expect("Failed to find irisctl binary for testing")
    }
    #[test]
    fn test_main_help_flag() {
        irisctl_cmd().arg("--help").assert().success();
    }
    #[test]
    fn test_main_version_flag() {
        irisctl_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}
