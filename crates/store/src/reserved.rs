// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use aka_core::ReservedCommands;

/// Parse a reserved command list: one command path per line.
///
/// Blank lines and `#` comments are skipped; paths are lowercased by
/// [`ReservedCommands::new`].
pub fn parse_reserved_commands(content: &str) -> ReservedCommands {
    ReservedCommands::new(
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#')),
    )
}
