// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Post-expansion token cleanup: environment variables and stray quotes

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Regex pattern for `$NAME` references (letter, then letters or digits)
// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static ENV_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$([A-Za-z][A-Za-z0-9]*)").expect("constant regex pattern is valid")
});

/// Source of environment variable values.
pub trait Environment {
    fn var(&self, name: &str) -> Option<String>;
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Replace every `$NAME` in `token` with its value; unset names become `""`.
pub fn substitute_env(token: &str, env: &dyn Environment) -> String {
    if !token.contains('$') {
        return token.to_string();
    }
    ENV_PATTERN
        .replace_all(token, |caps: &regex::Captures| {
            env.var(&caps[1]).unwrap_or_default()
        })
        .into_owned()
}

/// Strip one leading and one trailing quote (`'` or `"`), independently.
pub fn trim_quotes(token: &str) -> &str {
    const QUOTES: &[char] = &['\'', '"'];
    let token = token.strip_prefix(QUOTES).unwrap_or(token);
    token.strip_suffix(QUOTES).unwrap_or(token)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
