//! # Irisctl Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements the configuration system for irisctl. Every value
//! the deployment scripts this tool replaces hard-wired (engine program name,
//! compose file path, env-file pairs, access URLs) lives here as a code-level
//! default
//! that an optional project-scoped `.irisctl.toml` may override.
//!
//! ## Architecture
//!
//! - Configuration is loaded once per command execution and threaded
//!   explicitly into the handlers; there is no global mutable state.
//! - The project file is discovered by walking up from the current directory,
//!   stopping at a `.git` boundary so one repository cannot pick up another
//!   repository's configuration.
//! - `~` in configured paths is expanded via `shellexpand`.
//! - The result is validated before use; an empty engine program or an env
//!   pair with blank paths is a configuration error, not a latent panic.
//!
//! ## Examples
//!
//! ```rust
//! let cfg = config::load_config()?;
//! let compose_file = &cfg.local.compose_file;
//! let pairs = &cfg.env_files.local;
//! ```
//!
use crate::core::error::{IrisctlError, Result};
use anyhow::Context;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Represents the main configuration structure, loaded from `.irisctl.toml`.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in the TOML
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub local: LocalConfig,
    #[serde(default)]
    pub production: ProductionConfig,
    #[serde(default)]
    pub env_files: EnvFilesConfig,
}

/// How to reach the container engine on this host.
///
/// This replaces the old scripts' module-wide
/// "invocation style" flag: the engine invocation is resolved once at load
/// time and passed into every subprocess call, rather than consulted as a
/// global.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Executable to invoke (looked up on PATH, or an absolute path).
    #[serde(default = "default_engine_program")]
    pub program: String,
    /// First argument selecting the compose plugin (`docker compose ...`).
    #[serde(default = "default_compose_command")]
    pub compose_command: String,
}

/// Settings for the local development stack.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct LocalConfig {
    /// Compose definition file passed with `-f` to every local invocation.
    #[serde(default = "default_local_compose_file")]
    pub compose_file: String,
    /// Frontend URL printed after a successful start.
    #[serde(default = "default_local_app_url")]
    pub app_url: String,
    /// Backend API URL printed after a successful start.
    #[serde(default = "default_local_api_url")]
    pub api_url: String,
    /// Health-check URL printed after a successful start.
    #[serde(default = "default_local_health_url")]
    pub health_url: String,
}

/// Settings for the production stack. Production invocations name no compose
/// file and rely on the engine's default `docker-compose.yml` resolution.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct ProductionConfig {
    /// Public URL printed after rebuild/restart.
    #[serde(default = "default_production_app_url")]
    pub app_url: String,
}

/// One template/active-config pair handled by the provisioner.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct EnvFilePair {
    /// Distributed example file, committed to the repository.
    pub template: String,
    /// Active config file actually read by the running service. Never
    /// overwritten if it already exists.
    pub target: String,
}

/// The per-mode template/target pairs used by `irisctl setup`.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct EnvFilesConfig {
    #[serde(default = "default_local_pairs")]
    pub local: Vec<EnvFilePair>,
    #[serde(default = "default_production_pairs")]
    pub production: Vec<EnvFilePair>,
}

// --- Default value functions ---
// These mirror the constants baked into the old deployment scripts.

fn default_engine_program() -> String {
    "docker".to_string()
}
fn default_compose_command() -> String {
    "compose".to_string()
}
fn default_local_compose_file() -> String {
    "docker-compose.local.yml".to_string()
}
fn default_local_app_url() -> String {
    "http://localhost:3000".to_string()
}
fn default_local_api_url() -> String {
    "http://localhost:8000/api".to_string()
}
fn default_local_health_url() -> String {
    "http://localhost/health".to_string()
}
fn default_production_app_url() -> String {
    "https://irisvision.ai".to_string()
}
fn default_local_pairs() -> Vec<EnvFilePair> {
    vec![
        EnvFilePair {
            template: "backend/.env.local.example".to_string(),
            target: "backend/.env.local".to_string(),
        },
        EnvFilePair {
            template: "frontend/.env.local.example".to_string(),
            target: "frontend/.env.local".to_string(),
        },
    ]
}
fn default_production_pairs() -> Vec<EnvFilePair> {
    vec![
        EnvFilePair {
            template: "backend/.env.example".to_string(),
            target: "backend/.env".to_string(),
        },
        EnvFilePair {
            template: "frontend/.env.production.example".to_string(),
            target: "frontend/.env.production".to_string(),
        },
    ]
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            program: default_engine_program(),
            compose_command: default_compose_command(),
        }
    }
}
impl Default for LocalConfig {
    fn default() -> Self {
        Self {
            compose_file: default_local_compose_file(),
            app_url: default_local_app_url(),
            api_url: default_local_api_url(),
            health_url: default_local_health_url(),
        }
    }
}
impl Default for ProductionConfig {
    fn default() -> Self {
        Self {
            app_url: default_production_app_url(),
        }
    }
}
impl Default for EnvFilesConfig {
    fn default() -> Self {
        Self {
            local: default_local_pairs(),
            production: default_production_pairs(),
        }
    }
}

// --- Configuration Loading ---

const PROJECT_CONFIG_FILENAME: &str = ".irisctl.toml";

/// Loads the effective configuration: the project `.irisctl.toml` if one is
/// found in the current directory or its ancestors, else pure defaults.
/// Expands `~` in configured paths and validates the result.
pub fn load_config() -> Result<Config> {
    let mut config = match find_project_config_path()? {
        Some(path) => {
            info!("Loading project configuration from: {}", path.display());
            load_config_from_path(&path)?
        }
        None => {
            debug!("No .irisctl.toml found in current directory or ancestors; using defaults.");
            Config::default()
        }
    };
    expand_config_paths(&mut config).context("Failed to expand paths in configuration")?;
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

/// Walks up from the current directory looking for `.irisctl.toml`, stopping
/// at the first `.git` directory so the search stays inside the project.
fn find_project_config_path() -> Result<Option<PathBuf>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let mut path: &Path = &current_dir;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Ok(Some(project_config));
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return Ok(None);
        }
        match path.parent() {
            Some(parent) => path = parent,
            None => break,
        }
    }
    Ok(None)
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Expands `~` in every configured path-like value. URLs are left alone.
fn expand_config_paths(config: &mut Config) -> Result<()> {
    config.engine.program = expand_path_str(&config.engine.program)?;
    config.local.compose_file = expand_path_str(&config.local.compose_file)?;
    for pair in config
        .env_files
        .local
        .iter_mut()
        .chain(config.env_files.production.iter_mut())
    {
        pair.template = expand_path_str(&pair.template)?;
        pair.target = expand_path_str(&pair.target)?;
    }
    Ok(())
}

fn expand_path_str(raw: &str) -> Result<String> {
    let expanded = shellexpand::full(raw)
        .with_context(|| format!("Failed to expand path: {}", raw))?;
    Ok(expanded.into_owned())
}

/// Rejects configurations that could only produce confusing runtime failures.
fn validate_config(config: &Config) -> Result<()> {
    if config.engine.program.trim().is_empty() {
        anyhow::bail!(IrisctlError::Config(
            "engine.program must not be empty".to_string()
        ));
    }
    if config.local.compose_file.trim().is_empty() {
        anyhow::bail!(IrisctlError::Config(
            "local.compose_file must not be empty".to_string()
        ));
    }
    for pair in config
        .env_files
        .local
        .iter()
        .chain(config.env_files.production.iter())
    {
        if pair.template.trim().is_empty() || pair.target.trim().is_empty() {
            anyhow::bail!(IrisctlError::Config(
                "env_files entries must name both a template and a target".to_string()
            ));
        }
    }
    Ok(())
}
