// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Loading stores from disk

use crate::parser::{parse_alias_store_with_format, Format, StoreError};
use crate::reserved::parse_reserved_commands;
use aka_core::{AliasTable, ReservedCommands};
use std::io::ErrorKind;
use std::path::Path;

/// Load the alias file at `path`, picking the format from its extension.
///
/// A missing file is an empty table: no alias file means no aliases.
pub fn load_alias_file(path: &Path) -> Result<AliasTable, StoreError> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no alias file");
            return Ok(AliasTable::new());
        }
        Err(e) => return Err(e.into()),
    };
    let table = parse_alias_store_with_format(&content, format_for_path(path))?;
    tracing::debug!(path = %path.display(), aliases = table.len(), "loaded alias file");
    Ok(table)
}

/// Load a reserved command list. Unlike the alias file, it must exist.
pub fn load_reserved_file(path: &Path) -> Result<ReservedCommands, StoreError> {
    let content = std::fs::read_to_string(path)?;
    let reserved = parse_reserved_commands(&content);
    tracing::debug!(path = %path.display(), commands = reserved.len(), "loaded reserved commands");
    Ok(reserved)
}

/// `.toml` files are TOML; everything else (including no extension) is INI.
pub fn format_for_path(path: &Path) -> Format {
    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => Format::Toml,
        _ => Format::Ini,
    }
}

#[cfg(test)]
#[path = "find_tests.rs"]
mod tests;
