//! # Irisctl Production Command Group
//!
//! File: cli/src/commands/production/mod.rs
//!
//! ## Overview
//!
//! This module groups the two production lifecycle triggers. Unlike the local
//! dispatcher they take no action argument and carry no duplicate-run guard:
//! each is a single unconditional sequence against the engine's default
//! compose file resolution.
//!
//! - `rebuild`: `compose build`, `compose down`, `compose up -d` (surfaced
//!   as `irisctl rebuild`).
//! - `restart`: `compose restart` (surfaced as `irisctl restart`).
//!
//! Both submodules follow the same handler shape as the rest of the CLI: an
//! args struct parsed by clap and an async `handle_*` function.
//!

/// Implements `irisctl rebuild` (build images, down, up in background).
pub mod rebuild;
/// Implements `irisctl restart` (restart all services in place).
pub mod restart;
