//! # Irisctl Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! This module is the organizational entry point for the shared utilities
//! used by the irisctl command handlers. It separates cross-cutting concerns
//! (subprocess execution, compose invocation, console output) from
//! command-specific logic (`commands::`) and core infrastructure (`core::`).
//!
//! ## Architecture
//!
//! - **`compose`**: the `ComposeRunner`, which owns the resolved engine
//!   invocation and builds the fixed argument vectors for every lifecycle
//!   operation (up/down/build/restart/logs/ps), plus the availability probe.
//! - **`process`**: thin wrappers over `tokio::process::Command` for running
//!   external commands streamed to the terminal or with captured output.
//! - **`ui`**: the colored, emoji-coded status line helpers shared by every
//!   entry point.
//!
pub mod compose;
pub mod process;
pub mod ui;
