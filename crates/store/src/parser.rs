// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Alias store parsing (INI and TOML)

use crate::ini::parse_sections;
use aka_core::AliasTable;
use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

/// Alias store file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ini,
    Toml,
}

/// Errors that can occur while loading an alias store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("syntax error on line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// One alias section in a TOML store. Keys other than `command` are ignored.
#[derive(Debug, Deserialize)]
struct AliasSection {
    command: Option<String>,
}

/// Parse an alias store from INI content (convenience wrapper)
pub fn parse_alias_store(content: &str) -> Result<AliasTable, StoreError> {
    parse_alias_store_with_format(content, Format::Ini)
}

/// Parse an alias store from the given content in the specified format
pub fn parse_alias_store_with_format(
    content: &str,
    format: Format,
) -> Result<AliasTable, StoreError> {
    let sections: Vec<(String, Option<String>)> = match format {
        Format::Ini => parse_sections(content)?
            .into_iter()
            .map(|(name, mut options)| {
                let command = options.shift_remove("command");
                (name, command)
            })
            .collect(),
        Format::Toml => toml::from_str::<IndexMap<String, AliasSection>>(content)?
            .into_iter()
            .map(|(name, section)| (name, section.command))
            .collect(),
    };

    let mut table = AliasTable::new();
    for (name, command) in sections {
        let Some(command) = command else {
            tracing::warn!(section = %name, "skipping alias without a command");
            continue;
        };
        if !table.insert(&name, &command) {
            tracing::warn!(section = %name, "ignoring duplicate alias definition");
        }
    }
    Ok(table)
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
