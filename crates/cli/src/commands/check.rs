// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `aka check` — report alias definitions that cannot expand.

use aka_core::{AliasTable, TableIssue};
use anyhow::Result;

use crate::exit_error::ExitError;
use crate::output::{print_json, OutputFormat};

/// Print issues; exit 1 (without an extra error line) when there are any.
pub fn handle(table: &AliasTable, format: OutputFormat) -> Result<()> {
    let issues = table.validate();
    match format {
        OutputFormat::Text => print!("{}", render_text(table.len(), &issues)),
        OutputFormat::Json => print_json(&issues)?,
    }
    if issues.is_empty() {
        Ok(())
    } else {
        Err(ExitError::new(1, String::new()).into())
    }
}

fn render_text(checked: usize, issues: &[TableIssue]) -> String {
    if issues.is_empty() {
        return format!("{checked} alias(es) OK\n");
    }
    let mut out: String = issues.iter().map(|issue| format!("{issue}\n")).collect();
    out.push_str(&format!("\n{} issue(s) in {checked} alias(es)\n", issues.len()));
    out
}
