// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Expansion error types.

use thiserror::Error;

/// Errors that abort an expansion.
///
/// Both variants are fatal to the current invocation: the caller must not
/// dispatch any part of the command.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExpandError {
    /// A template references a positional argument that was not supplied, or
    /// a supplied positional slot has no placeholder to receive it.
    #[error(
        "inconsistent placeholder indexing in alias '{alias}': expected {expected}, got {supplied}"
    )]
    InconsistentPlaceholderIndexing {
        /// Alias name as typed.
        alias: String,
        /// What the template needs (e.g. "2 positional arguments").
        expected: String,
        /// What was available (e.g. "1 argument").
        supplied: String,
    },

    /// The expanded output still contains an alias.
    #[error("alias '{alias}' expands to another alias; recursive aliases are not allowed")]
    RecursiveAlias {
        /// The post-expansion token that resolves to an alias.
        alias: String,
    },
}

impl ExpandError {
    pub(crate) fn placeholders(
        alias: &str,
        expected: impl Into<String>,
        supplied: impl Into<String>,
    ) -> Self {
        Self::InconsistentPlaceholderIndexing {
            alias: alias.to_string(),
            expected: expected.into(),
            supplied: supplied.into(),
        }
    }
}

/// "1 argument", "2 arguments"
pub(crate) fn plural(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{n} {noun}")
    } else {
        format!("{n} {noun}s")
    }
}
