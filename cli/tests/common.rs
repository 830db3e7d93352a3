//! # Irisctl Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files (`setup.rs`, `local.rs`,
//! `production.rs`). Each `.rs` file under `cli/tests/` is compiled as a
//! separate test crate running the real `irisctl` binary.
//!
//! The lifecycle tests never need a Docker daemon: irisctl resolves the
//! engine executable from `.irisctl.toml`, so each test installs a tiny
//! stub engine shell script into a temp project directory and asserts on
//! the argument vectors the stub logged.
//!

// Different test files use different helpers.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub use assert_cmd::Command;

/// Creates an `assert_cmd::Command` for the compiled `irisctl` binary.
pub fn irisctl_cmd() -> Command {
    Command::cargo_bin("irisctl").expect("Failed to find irisctl binary for testing")
}

/// Behavior knobs for the stub engine script.
pub struct StubEngineSpec {
    /// Exit code of the `version` probe. Non-zero simulates a stopped daemon.
    pub version_exit: i32,
    /// Stdout of `compose ... ps -q`. One container ID per line; empty means
    /// no running containers.
    pub ps_stdout: String,
    /// Exit code of `compose ... build`. Non-zero simulates a failed build.
    pub build_exit: i32,
}

impl Default for StubEngineSpec {
    fn default() -> Self {
        Self {
            version_exit: 0,
            ps_stdout: String::new(),
            build_exit: 0,
        }
    }
}

/// A stub engine installed into a test project directory.
pub struct StubEngine {
    /// Absolute path of the stub executable.
    pub program: PathBuf,
    /// Absolute path of the argv log the stub appends to.
    pub log: PathBuf,
}

impl StubEngine {
    /// The argument vectors the stub has been invoked with, one per line,
    /// space-joined. Empty if the stub was never invoked.
    pub fn logged_invocations(&self) -> Vec<String> {
        match fs::read_to_string(&self.log) {
            Ok(content) => content.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }
}

/// Writes an executable stub engine script into `dir` and a `.irisctl.toml`
/// pointing irisctl at it. Tests then run irisctl with `dir` as the current
/// directory.
#[cfg(unix)]
pub fn install_stub_engine(dir: &Path, spec: &StubEngineSpec) -> StubEngine {
    use std::os::unix::fs::PermissionsExt;

    let program = dir.join("stub-engine");
    let log = dir.join("stub-engine.log");

    // Every invocation logs its full argument vector, then dispatches on the
    // operation the same way the real engine would.
    let script = format!(
        "#!/bin/sh\n\
         printf '%s\\n' \"$*\" >> '{log}'\n\
         if [ \"$1\" = \"version\" ]; then exit {version_exit}; fi\n\
         case \"$*\" in\n\
           *\"ps -q\"*) printf '%s' '{ps_stdout}'; exit 0 ;;\n\
           *build*) exit {build_exit} ;;\n\
         esac\n\
         exit 0\n",
        log = log.display(),
        version_exit = spec.version_exit,
        ps_stdout = spec.ps_stdout,
        build_exit = spec.build_exit,
    );
    fs::write(&program, script).expect("Failed to write stub engine script");
    let mut perms = fs::metadata(&program)
        .expect("Failed to stat stub engine")
        .permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&program, perms).expect("Failed to chmod stub engine");

    write_project_config(dir, &program);

    StubEngine { program, log }
}

/// Writes a `.irisctl.toml` in `dir` selecting the given engine program.
pub fn write_project_config(dir: &Path, program: &Path) {
    let config = format!("[engine]\nprogram = '{}'\n", program.display());
    fs::write(dir.join(".irisctl.toml"), config).expect("Failed to write .irisctl.toml");
}
