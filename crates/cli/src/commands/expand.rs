// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `aka expand` — resolve aliases in an argument vector.

use aka_core::{AliasEngine, Environment};
use anyhow::Result;
use clap::Args;

use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct ExpandArgs {
    /// Tokens to expand, exactly as the user typed them
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
    pub args: Vec<String>,
}

/// Expand and print. Nothing is printed when expansion fails.
pub fn handle<E: Environment>(
    args: ExpandArgs,
    engine: &AliasEngine<E>,
    format: OutputFormat,
) -> Result<()> {
    let expanded = engine.expand(args.args.as_slice())?;
    match format {
        OutputFormat::Text => print!("{}", render_text(&expanded)),
        OutputFormat::Json => print_json(&expanded)?,
    }
    Ok(())
}

/// One token per line.
fn render_text(tokens: &[String]) -> String {
    tokens.iter().map(|t| format!("{t}\n")).collect()
}

#[cfg(test)]
#[path = "expand_tests.rs"]
mod tests;
