// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sectioned key/value (INI-style) parsing.
//!
//! The alias file looks like:
//!
//! ```text
//! [gl]
//! command = group list
//!
//! [cm {0} {1}]
//! command = vm create -g {0} -n {1}
//! ```
//!
//! Section names are kept verbatim (they carry usage hints); option keys are
//! lowercased. Indented lines continue the previous value. Duplicate sections
//! and duplicate keys are ignored with a warning; the first one wins.

use crate::parser::StoreError;
use indexmap::IndexMap;

/// Section name → (key → value), in file order.
pub type Sections = IndexMap<String, IndexMap<String, String>>;

/// Where key/value lines currently land.
enum Target {
    /// Before the first header.
    None,
    /// A section being collected.
    Section(String),
    /// A duplicate section whose lines are dropped.
    Ignored,
}

/// Parse INI-style content into ordered sections.
pub fn parse_sections(content: &str) -> Result<Sections, StoreError> {
    let mut sections = Sections::new();
    let mut target = Target::None;
    // Last key written, for continuation lines
    let mut last_key: Option<String> = None;
    // Continuation lines of a duplicate key are dropped with it
    let mut dropping = false;

    for (index, raw) in content.lines().enumerate() {
        let line_no = index + 1;
        let trimmed = raw.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
            continue;
        }

        if raw.starts_with(char::is_whitespace) {
            if dropping {
                continue;
            }
            match (&target, &last_key) {
                (Target::Section(section), Some(key)) => {
                    if let Some(value) = sections.get_mut(section).and_then(|s| s.get_mut(key)) {
                        if !value.is_empty() {
                            value.push('\n');
                        }
                        value.push_str(trimmed);
                    }
                    continue;
                }
                (Target::Ignored, _) => continue,
                _ => {
                    return Err(syntax(line_no, "continuation line without a preceding key"));
                }
            }
        }

        if let Some(header) = trimmed.strip_prefix('[') {
            let Some(name) = header.strip_suffix(']') else {
                return Err(syntax(line_no, "unterminated section header"));
            };
            let name = name.trim();
            if name.is_empty() {
                return Err(syntax(line_no, "empty section name"));
            }
            last_key = None;
            dropping = false;
            if sections.contains_key(name) {
                tracing::warn!(section = name, line = line_no, "ignoring duplicate section");
                target = Target::Ignored;
            } else {
                sections.insert(name.to_string(), IndexMap::new());
                target = Target::Section(name.to_string());
            }
            continue;
        }

        let Some((key, value)) = split_pair(trimmed) else {
            return Err(syntax(line_no, "expected '[section]' or 'key = value'"));
        };
        if key.is_empty() {
            return Err(syntax(line_no, "empty key"));
        }

        match &target {
            Target::None => {
                return Err(syntax(line_no, "key/value pair before any section header"));
            }
            Target::Ignored => continue,
            Target::Section(section) => {
                let Some(options) = sections.get_mut(section) else {
                    continue;
                };
                if options.contains_key(&key) {
                    tracing::warn!(section = %section, key = %key, line = line_no, "ignoring duplicate key");
                    last_key = None;
                    dropping = true;
                    continue;
                }
                options.insert(key.clone(), value.to_string());
                last_key = Some(key);
                dropping = false;
            }
        }
    }

    Ok(sections)
}

/// Split at the first `=` or `:`; the key is trimmed and lowercased.
fn split_pair(line: &str) -> Option<(String, &str)> {
    let at = line.find(&['=', ':'][..])?;
    let key = line[..at].trim().to_lowercase();
    Some((key, line[at + 1..].trim()))
}

fn syntax(line: usize, message: &str) -> StoreError {
    StoreError::Syntax {
        line,
        message: message.to_string(),
    }
}

#[cfg(test)]
#[path = "ini_tests.rs"]
mod tests;
