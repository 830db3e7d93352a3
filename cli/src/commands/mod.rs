//! # Irisctl Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the four entry points that make up the irisctl
//! CLI, one module per entry point, each exporting an args struct and an
//! async `handle_*` function that `main.rs` routes to.
//!
//! ## Entry Points
//!
//! - `setup`: the environment-file provisioner (`irisctl setup [MODE]`)
//! - `local`: the local lifecycle dispatcher (`irisctl local [ACTION]`)
//! - `production`: the production triggers (`irisctl rebuild`,
//!   `irisctl restart`)
//!
//! Each entry point is a flat sequence at runtime: parse arguments, probe
//! engine availability where relevant, perform one to three subprocess
//! calls, print status. None of them depends on another.
//!

/// Lifecycle dispatcher for the local development stack.
pub mod local;
/// Production rebuild and restart triggers.
pub mod production;
/// Environment-file provisioner.
pub mod setup;
