// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `aka list` — show defined aliases.

use aka_core::{AliasEntry, AliasTable};
use anyhow::Result;
use serde::Serialize;

use crate::output::{print_json, OutputFormat};
use crate::table::{Column, Table};

#[derive(Debug, Serialize, PartialEq)]
struct AliasRow<'a> {
    name: &'a str,
    key: &'a str,
    command: &'a str,
    positional: usize,
}

impl<'a> From<&'a AliasEntry> for AliasRow<'a> {
    fn from(entry: &'a AliasEntry) -> Self {
        Self {
            name: entry.name(),
            key: entry.key(),
            command: entry.template(),
            positional: entry.positional_count(),
        }
    }
}

pub fn handle(table: &AliasTable, format: OutputFormat) -> Result<()> {
    let rows: Vec<AliasRow<'_>> = table.iter().map(AliasRow::from).collect();
    match format {
        OutputFormat::Text => {
            if rows.is_empty() {
                println!("No aliases defined");
                return Ok(());
            }
            render_table(&rows, Table::new(columns()), &mut std::io::stdout());
        }
        OutputFormat::Json => print_json(&rows)?,
    }
    Ok(())
}

fn columns() -> Vec<Column> {
    vec![
        Column::left("NAME"),
        Column::right("ARGS"),
        Column::muted("COMMAND").with_max(80),
    ]
}

fn render_table(rows: &[AliasRow<'_>], mut table: Table, out: &mut impl std::io::Write) {
    for row in rows {
        // Multi-line templates read better flattened
        let command = row.command.split_whitespace().collect::<Vec<_>>().join(" ");
        table.row(vec![row.name.to_string(), row.positional.to_string(), command]);
    }
    table.render(out);
}
