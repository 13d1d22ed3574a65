// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables read by unitkit are defined here.
//! Use these accessors instead of calling `std::env::var()` directly.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

// Re-export name constants for callers that need the raw name string.
pub use names::*;

use std::path::PathBuf;

/// `UNITKIT_SHOW_OUTPUT` — Allow the support facade to print. Default off.
pub fn show_output() -> Option<bool> {
    var_bool(names::UNITKIT_SHOW_OUTPUT)
}

/// `UNITKIT_OVERRIDE_FORCE_OUTPUT` — Keep output quiet even when a test forces it on.
pub fn override_force_output() -> Option<bool> {
    var_bool(names::UNITKIT_OVERRIDE_FORCE_OUTPUT)
}

/// `UNITKIT_CONFIG` — Path to a TOML support configuration file.
pub fn config_path() -> Option<PathBuf> {
    std::env::var(names::UNITKIT_CONFIG).ok().map(PathBuf::from)
}

/// Parse a boolean flag value. Unrecognized values yield `None`.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn var_bool(name: &str) -> Option<bool> {
    std::env::var(name).ok().and_then(|v| parse_bool(&v))
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
