//! # Irisctl Console Output Helpers (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! The colored, emoji-coded status lines shared by every irisctl entry point.
//! These are the user-facing contract of the tool: progress headlines in bold
//! blue, confirmations in green, warnings in yellow, failures in red, and
//! follow-up guidance (URLs, next steps) in cyan.
//!
//! Diagnostics go through `tracing` instead; nothing here is structured
//! logging, just the console conversation the deployment scripts have always
//! had with their user.
//!

/// ANSI escape for bright blue (headlines).
pub const BLUE: &str = "\x1b[94m";
/// ANSI escape for bright cyan (hints and URLs).
pub const CYAN: &str = "\x1b[96m";
/// ANSI escape for bright green (success lines).
pub const GREEN: &str = "\x1b[92m";
/// ANSI escape for bright yellow (warnings and intermediate steps).
pub const YELLOW: &str = "\x1b[93m";
/// ANSI escape for bright red (failure lines).
pub const RED: &str = "\x1b[91m";
/// ANSI escape for bold text.
pub const BOLD: &str = "\x1b[1m";
/// ANSI reset.
pub const RESET: &str = "\x1b[0m";

/// Prints a bold blue headline announcing what is about to happen.
pub fn step(msg: &str) {
    println!("{}{}{}{}", BLUE, BOLD, msg, RESET);
}

/// Prints a plain yellow line for an intermediate step of a sequence.
pub fn substep(msg: &str) {
    println!("{}{}{}", YELLOW, msg, RESET);
}

/// Prints a green checkmark confirmation.
pub fn success(msg: &str) {
    println!("{}✅ {}{}", GREEN, msg, RESET);
}

/// Prints a yellow warning. Warnings are informational; the command still
/// exits successfully.
pub fn warn(msg: &str) {
    println!("{}⚠️  {}{}", YELLOW, msg, RESET);
}

/// Prints a red failure line.
pub fn fail(msg: &str) {
    println!("{}❌ {}{}", RED, msg, RESET);
}

/// Prints a cyan guidance line (next steps, access URLs).
pub fn hint(msg: &str) {
    println!("{}{}{}", CYAN, msg, RESET);
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    /// The escape constants are part of the output contract the integration
    /// tests strip; keep them stable.
    #[test]
    fn test_ansi_constants() {
        assert_eq!(GREEN, "\x1b[92m");
        assert_eq!(RESET, "\x1b[0m");
        assert!(BOLD.starts_with('\x1b'));
    }
}
