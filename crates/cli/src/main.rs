// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! aka - command-line alias expansion

mod color;
mod commands;
mod env;
mod exit_error;
mod logging;
mod output;
mod table;

use output::OutputFormat;

use aka_core::{AliasEngine, AliasTable, ReservedCommands};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use commands::{check, expand, list};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "aka",
    version,
    about = "aka - expand command-line aliases into full commands"
)]
struct Cli {
    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t,
        global = true
    )]
    output: OutputFormat,

    /// Alias file [default: $AKA_ALIAS_FILE, then <config dir>/aka/alias]
    #[arg(long, value_name = "PATH", global = true)]
    alias_file: Option<PathBuf>,

    /// Reserved command list, one command path per line [default: $AKA_RESERVED_FILE]
    #[arg(long, value_name = "PATH", global = true)]
    reserved_file: Option<PathBuf>,

    /// Show informational logs
    #[arg(long, global = true)]
    verbose: bool,

    /// Show debug logs, including expansion traces
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand aliases in an argument vector and print the result
    Expand(expand::ExpandArgs),
    /// List defined aliases
    List,
    /// Check the alias file for definitions that cannot expand
    Check,
}

fn main() {
    if let Err(e) = run() {
        let code = e
            .downcast_ref::<exit_error::ExitError>()
            .map_or(1, |c| c.code);
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(code);
    }
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, we skip
/// the "Caused by" chain to avoid noisy duplicate output (common when
/// thiserror variants use `#[error("... {0}")]` with `#[from]`).
/// Otherwise we render the full chain so context isn't lost.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(logging::Verbosity::from_flags(cli.verbose, cli.debug));
    let format = cli.output;

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // No subcommand provided — print help and exit 0
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
            return Ok(());
        }
    };

    let table = load_aliases(cli.alias_file)?;

    match command {
        Commands::Expand(args) => {
            let reserved = load_reserved(cli.reserved_file)?;
            let engine = AliasEngine::new(table, reserved);
            expand::handle(args, &engine, format)?
        }
        Commands::List => list::handle(&table, format)?,
        Commands::Check => check::handle(&table, format)?,
    }

    Ok(())
}

fn load_aliases(flag: Option<PathBuf>) -> Result<AliasTable> {
    let Some(path) = flag.or_else(env::alias_file) else {
        tracing::debug!("no alias file location; expanding with an empty table");
        return Ok(AliasTable::new());
    };
    aka_store::load_alias_file(&path)
        .with_context(|| format!("failed to load alias file '{}'", path.display()))
}

fn load_reserved(flag: Option<PathBuf>) -> Result<ReservedCommands> {
    let Some(path) = flag.or_else(env::reserved_file) else {
        return Ok(ReservedCommands::default());
    };
    aka_store::load_reserved_file(&path)
        .with_context(|| format!("failed to load reserved commands '{}'", path.display()))
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
