// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The alias expansion scan

use crate::env::{substitute_env, trim_quotes, Environment, ProcessEnv};
use crate::error::{plural, ExpandError};
use crate::reserved::{CollisionMatcher, ReservedCommands};
use crate::table::AliasTable;
use std::collections::HashSet;
use std::time::Instant;

/// Expands aliases in argument vectors.
///
/// The table and reserved commands are read-only during [`expand`], so one
/// engine can serve concurrent callers; each call owns its scan state.
///
/// [`expand`]: AliasEngine::expand
#[derive(Debug, Clone)]
pub struct AliasEngine<E = ProcessEnv> {
    table: AliasTable,
    reserved: ReservedCommands,
    env: E,
}

/// Scan state for one call to [`AliasEngine::expand`].
struct ExpansionState<'a> {
    /// Tokens consumed so far, aligned against reserved command prefixes.
    matcher: CollisionMatcher<'a>,
    /// Aliases deliberately left unexpanded because they collided.
    collisions: HashSet<String>,
}

impl<'a> ExpansionState<'a> {
    fn new(reserved: &'a ReservedCommands) -> Self {
        Self {
            matcher: reserved.matcher(),
            collisions: HashSet::new(),
        }
    }
}

impl AliasEngine<ProcessEnv> {
    pub fn new(table: AliasTable, reserved: ReservedCommands) -> Self {
        Self {
            table,
            reserved,
            env: ProcessEnv,
        }
    }
}

impl<E: Environment> AliasEngine<E> {
    /// Replace the source used for `$NAME` substitution.
    pub fn with_env<F: Environment>(self, env: F) -> AliasEngine<F> {
        AliasEngine {
            table: self.table,
            reserved: self.reserved,
            env,
        }
    }

    /// Rewrite `args` into the argument vector the host CLI should dispatch.
    ///
    /// Scans left to right. Each non-flag token is first checked against the
    /// reserved commands at its level; a colliding alias is passed through
    /// with a warning. Otherwise an alias is replaced by its template, with
    /// the next `k` tokens consumed as positional arguments when the template
    /// has `k` placeholders. Once anything changed, `$NAME` references are
    /// substituted, stray quotes trimmed, and the output is rejected if it
    /// still contains an alias.
    ///
    /// Input with no applicable alias is returned unchanged.
    pub fn expand<S: AsRef<str>>(&self, args: &[S]) -> Result<Vec<String>, ExpandError> {
        let started = Instant::now();
        let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
        let mut state = ExpansionState::new(&self.reserved);

        let expanded = self.scan(&args, &mut state)?;
        if expanded == args {
            return Ok(expanded);
        }

        let transformed: Vec<String> = expanded
            .iter()
            .map(|token| trim_quotes(&substitute_env(token, &self.env)).to_string())
            .collect();

        tracing::debug!(
            elapsed_us = started.elapsed().as_micros() as u64,
            from = ?args,
            to = ?transformed,
            "alias transformation"
        );

        self.check_recursion(&transformed, &state)?;
        Ok(transformed)
    }

    fn scan(
        &self,
        args: &[&str],
        state: &mut ExpansionState<'_>,
    ) -> Result<Vec<String>, ExpandError> {
        let mut out = Vec::with_capacity(args.len());
        let mut cursor = 0;

        while cursor < args.len() {
            let token = args[cursor];
            cursor += 1;

            if is_flag(token) {
                out.push(token.to_string());
                continue;
            }

            let entry = self.table.lookup(token);

            if state.matcher.try_advance(token) {
                if let Some(entry) = entry {
                    tracing::warn!(
                        alias = token,
                        command = entry.template(),
                        "alias collides with a reserved command and will not be expanded"
                    );
                    state.collisions.insert(entry.name().to_string());
                }
                out.push(token.to_string());
                continue;
            }

            let Some(entry) = entry else {
                out.push(token.to_string());
                continue;
            };

            let count = entry.check_placeholders()?;
            let command = if count == 0 {
                if entry.template() != token {
                    let words: Vec<&str> = entry.template().split_whitespace().collect();
                    state.matcher.advance(&words);
                }
                entry.template().to_string()
            } else {
                let end = cursor + count;
                let Some(positional) = args.get(cursor..end) else {
                    return Err(ExpandError::placeholders(
                        token,
                        plural(count, "positional argument"),
                        plural(args.len() - cursor, "argument"),
                    ));
                };
                cursor = end;
                entry.fill(positional)?
            };

            out.extend(command.split_whitespace().map(str::to_string));
        }

        Ok(out)
    }

    /// Depth-1 cycle guard: no output token may itself be an alias unless it
    /// was left unexpanded on purpose.
    fn check_recursion(
        &self,
        transformed: &[String],
        state: &ExpansionState<'_>,
    ) -> Result<(), ExpandError> {
        for token in transformed.iter().filter(|t| !is_flag(t)) {
            if let Some(entry) = self.table.lookup(token) {
                if !state.collisions.contains(entry.name()) {
                    return Err(ExpandError::RecursiveAlias {
                        alias: token.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

fn is_flag(token: &str) -> bool {
    token.starts_with('-')
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
