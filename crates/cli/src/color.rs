// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! 256-color ANSI styling for table output.

use std::io::IsTerminal;

pub mod codes {
    /// Column headers
    pub const HEADER: u8 = 74;
    /// Alias commands
    pub const MUTED: u8 = 240;

    #[cfg(test)]
    pub const HEADER_START: &str = "\x1b[38;5;74m";
    #[cfg(test)]
    pub const RESET: &str = "\x1b[0m";
}

/// `NO_COLOR=1` disables, then `COLOR=1` forces, then stdout must be a TTY.
pub fn should_colorize() -> bool {
    !crate::env::no_color() && (crate::env::force_color() || std::io::stdout().is_terminal())
}

fn paint(code: u8, text: &str) -> String {
    format!("\x1b[38;5;{code}m{text}\x1b[0m")
}

pub fn apply_header(text: &str) -> String {
    paint(codes::HEADER, text)
}

pub fn apply_muted(text: &str) -> String {
    paint(codes::MUTED, text)
}
