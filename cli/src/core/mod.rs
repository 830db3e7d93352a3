//! # Irisctl Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure components that provide
//! foundational functionality for irisctl: configuration and error
//! management.
//!
//! ## Architecture
//!
//! - `config`: loading, defaulting, and validation of `.irisctl.toml`
//! - `error`: the `IrisctlError` taxonomy and the shared `Result` alias
//!
//! ## Usage
//!
//! Core infrastructure is imported by command handlers:
//!
//! ```rust
//! use crate::core::config;
//! use crate::core::error::{IrisctlError, Result};
//! ```
//!
pub mod config;
pub mod error;
