// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use std::path::PathBuf;

// --- Alias file ---

/// Resolve the alias file: AKA_ALIAS_FILE > AKA_CONFIG_DIR/alias > <config dir>/aka/alias
pub fn alias_file() -> Option<PathBuf> {
    if let Some(file) = non_empty("AKA_ALIAS_FILE") {
        return Some(PathBuf::from(file));
    }
    config_dir().map(|dir| dir.join("alias"))
}

/// Resolve the config directory: AKA_CONFIG_DIR > <platform config dir>/aka
pub fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = non_empty("AKA_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|dir| dir.join("aka"))
}

// --- Reserved commands ---

pub fn reserved_file() -> Option<PathBuf> {
    non_empty("AKA_RESERVED_FILE").map(PathBuf::from)
}

// --- Color ---

pub fn no_color() -> bool {
    std::env::var("NO_COLOR").is_ok_and(|v| v == "1")
}

pub fn force_color() -> bool {
    std::env::var("COLOR").is_ok_and(|v| v == "1")
}

fn non_empty(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|s| !s.is_empty())
}
