// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The alias table

use crate::entry::AliasEntry;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// Aliases keyed by lowercased name, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    entries: IndexMap<String, AliasEntry>,
}

/// A problem found by [`AliasTable::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableIssue {
    pub alias: String,
    pub message: String,
}

impl fmt::Display for TableIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.alias, self.message)
    }
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an alias from a store key (`"gl"` or `"cm {0} {1}"`).
    ///
    /// Returns `false` without replacing anything if the name is blank or
    /// already defined; the first definition wins.
    pub fn insert(&mut self, key: &str, template: &str) -> bool {
        let Some(entry) = AliasEntry::new(key, template) else {
            return false;
        };
        if self.entries.contains_key(entry.name()) {
            return false;
        }
        self.entries.insert(entry.name().to_string(), entry);
        true
    }

    /// Resolve a whole token to its alias entry, ignoring ASCII case.
    ///
    /// The token must equal either an alias name or a full key with its
    /// usage hint (`"cm {0} {1}"`). A token that merely starts with an alias
    /// name (`"gl prod"`) is not an alias.
    pub fn lookup(&self, token: &str) -> Option<&AliasEntry> {
        let by_name = if token.bytes().any(|b| b.is_ascii_uppercase()) {
            self.entries.get(&token.to_ascii_lowercase())
        } else {
            self.entries.get(token)
        };
        by_name.or_else(|| {
            self.entries
                .values()
                .find(|entry| entry.key().eq_ignore_ascii_case(token))
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AliasEntry> {
        self.entries.values()
    }

    /// Statically check every entry for problems expansion would hit.
    ///
    /// Reports placeholder indexing errors and templates that mention
    /// another alias (which the recursion guard rejects at expansion time).
    pub fn validate(&self) -> Vec<TableIssue> {
        let mut issues = Vec::new();
        for entry in self.iter() {
            if let Err(e) = entry.check_placeholders() {
                issues.push(TableIssue {
                    alias: entry.name().to_string(),
                    message: e.to_string(),
                });
            }
            for word in entry.template().split_whitespace() {
                if word.starts_with('-') {
                    continue;
                }
                if let Some(other) = self.lookup(word) {
                    issues.push(TableIssue {
                        alias: entry.name().to_string(),
                        message: format!("command references alias '{}'", other.name()),
                    });
                }
            }
        }
        issues
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for AliasTable {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (key, template) in iter {
            table.insert(key, template);
        }
        table
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
