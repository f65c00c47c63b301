// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Alias entries and positional placeholders

use crate::error::{plural, ExpandError};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Regex pattern for `{N}` positional placeholders
// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static PLACEHOLDER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\d+)\}").expect("constant regex pattern is valid"));

/// A single alias: a name mapped to a command template.
///
/// The table key may carry a usage hint after the name (`"cm {0} {1}"`); the
/// hint is informational but must agree with the template's placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AliasEntry {
    name: String,
    key: String,
    template: String,
}

impl AliasEntry {
    /// Build an entry from a store key and its `command` template.
    ///
    /// Returns `None` when the key has no words.
    pub fn new(key: &str, template: &str) -> Option<Self> {
        let key = key.trim();
        let name = key.split_whitespace().next()?.to_ascii_lowercase();
        Some(Self {
            name,
            key: key.to_string(),
            template: template.trim().to_string(),
        })
    }

    /// Lowercased first word of the key; the lookup name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The key as written in the store, usage hint included.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Everything after the name in the key (e.g. `"{0} {1}"`), or `""`.
    pub fn usage(&self) -> &str {
        self.key
            .split_once(char::is_whitespace)
            .map(|(_, rest)| rest.trim())
            .unwrap_or("")
    }

    /// Distinct placeholder indices referenced by the template.
    pub fn placeholder_indices(&self) -> BTreeSet<usize> {
        indices_in(&self.template)
    }

    /// Distinct placeholder indices declared by the usage hint.
    pub fn usage_hint_indices(&self) -> BTreeSet<usize> {
        indices_in(self.usage())
    }

    /// Number of distinct `{n}` placeholders in the template.
    pub fn positional_count(&self) -> usize {
        self.placeholder_indices().len()
    }

    /// Verify the template's placeholders are `{0}..{k-1}` and match the
    /// usage hint when one is given. Returns `k`.
    pub fn check_placeholders(&self) -> Result<usize, ExpandError> {
        let indices = self.placeholder_indices();
        let count = indices.len();

        if let Some(&max) = indices.last() {
            if max != count - 1 {
                return Err(ExpandError::placeholders(
                    &self.name,
                    format!("placeholders {{0}} through {{{}}}", count - 1),
                    format!("a reference to {{{max}}}"),
                ));
            }
        }

        let hinted = self.usage_hint_indices();
        if !hinted.is_empty() && hinted != indices {
            return Err(ExpandError::placeholders(
                &self.name,
                format!("{} in the command", plural(count, "placeholder")),
                format!("{} in usage '{}'", plural(hinted.len(), "slot"), self.key),
            ));
        }

        Ok(count)
    }

    /// Substitute `{n}` with `args[n]` in one pass over the template.
    ///
    /// Substituted values are not re-scanned, so an argument that itself
    /// contains `{1}` is inserted verbatim.
    pub fn fill(&self, args: &[&str]) -> Result<String, ExpandError> {
        let count = self.check_placeholders()?;
        if args.len() != count {
            return Err(ExpandError::placeholders(
                &self.name,
                plural(count, "positional argument"),
                plural(args.len(), "argument"),
            ));
        }

        let filled = PLACEHOLDER_PATTERN.replace_all(&self.template, |caps: &regex::Captures| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|i| args.get(i))
                .map(|arg| arg.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        });
        Ok(filled.into_owned())
    }
}

fn indices_in(text: &str) -> BTreeSet<usize> {
    PLACEHOLDER_PATTERN
        .captures_iter(text)
        // An index too large for usize can never be contiguous
        .map(|caps| caps[1].parse().unwrap_or(usize::MAX))
        .collect()
}

#[cfg(test)]
#[path = "entry_tests.rs"]
mod tests;
