// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reserved (built-in) command paths and per-level collision matching.
//!
//! Reserved commands form a forest of space-separated segments
//! (`vm create`, `vm list`, `group show`). Whether a token collides depends on
//! the level it appears at: `vm` collides as a first word but not as a second
//! one. [`CollisionMatcher`] walks the forest one level per consumed segment,
//! narrowing the set of commands still consistent with the tokens seen so far.

/// Built-in command paths supplied by the host CLI, in their given order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservedCommands {
    commands: Vec<Vec<String>>,
}

impl ReservedCommands {
    /// Split each command into lowercase segments; blank commands are dropped.
    pub fn new<I, S>(commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let commands = commands
            .into_iter()
            .map(|c| {
                c.as_ref()
                    .split_whitespace()
                    .map(str::to_ascii_lowercase)
                    .collect::<Vec<_>>()
            })
            .filter(|segments| !segments.is_empty())
            .collect();
        Self { commands }
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Commands as space-joined paths.
    pub fn iter(&self) -> impl Iterator<Item = String> + '_ {
        self.commands.iter().map(|segments| segments.join(" "))
    }

    /// A fresh matcher positioned at the first level with every command live.
    pub fn matcher(&self) -> CollisionMatcher<'_> {
        CollisionMatcher {
            reserved: self,
            remaining: (0..self.commands.len()).collect(),
            depth: 0,
        }
    }
}

/// Accumulating prefix matcher over [`ReservedCommands`].
///
/// Tokens are compared as whole segments, never as patterns, so alias names
/// containing regex metacharacters match only themselves.
#[derive(Debug, Clone)]
pub struct CollisionMatcher<'a> {
    reserved: &'a ReservedCommands,
    remaining: Vec<usize>,
    depth: usize,
}

impl CollisionMatcher<'_> {
    /// Number of segments consumed so far.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Reserved commands still consistent with the consumed segments.
    pub fn remaining(&self) -> impl Iterator<Item = String> + '_ {
        self.remaining
            .iter()
            .map(|&i| self.reserved.commands[i].join(" "))
    }

    /// True if `token` is a reserved segment at the current level.
    pub fn collides(&self, token: &str) -> bool {
        self.remaining
            .iter()
            .any(|&i| segment_eq(&self.reserved.commands[i], self.depth, token))
    }

    /// Consume `token` if it is a reserved segment at the current level.
    ///
    /// On a match the live set narrows and the level advances; otherwise the
    /// matcher is left untouched. Returns whether it matched.
    pub fn try_advance(&mut self, token: &str) -> bool {
        if !self.collides(token) {
            return false;
        }
        self.advance(&[token]);
        true
    }

    /// Consume `words` unconditionally, narrowing to commands whose next
    /// segments equal them. The live set may become empty, after which
    /// nothing collides.
    pub fn advance(&mut self, words: &[&str]) {
        let commands = &self.reserved.commands;
        let depth = self.depth;
        self.remaining.retain(|&i| {
            words
                .iter()
                .enumerate()
                .all(|(offset, word)| segment_eq(&commands[i], depth + offset, word))
        });
        self.depth += words.len();
    }
}

fn segment_eq(segments: &[String], depth: usize, token: &str) -> bool {
    segments
        .get(depth)
        .is_some_and(|segment| segment.eq_ignore_ascii_case(token))
}

#[cfg(test)]
#[path = "reserved_tests.rs"]
mod tests;
