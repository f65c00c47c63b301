// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! aka-core: alias expansion engine for command-line argument vectors.
//!
//! Rewrites the tokens a user typed into the tokens the host CLI should
//! dispatch, substituting user-defined aliases with their command templates.
//!
//! ```ignore
//! use aka_core::{AliasEngine, AliasTable, ReservedCommands};
//!
//! let mut table = AliasTable::new();
//! table.insert("cm {0} {1}", "vm create -g {0} -n {1}");
//! let engine = AliasEngine::new(table, ReservedCommands::new(["vm create"]));
//!
//! let out = engine.expand(&["cm", "rg1", "vm1"])?;
//! assert_eq!(out, ["vm", "create", "-g", "rg1", "-n", "vm1"]);
//! # Ok::<(), aka_core::ExpandError>(())
//! ```
//!
//! # Pipeline
//!
//! ```text
//! args ─▶ scan (lookup, collision check, positional fill)
//!      ─▶ post-process ($VAR substitution, quote trimming)
//!      ─▶ recursion guard ─▶ resolved args
//! ```

mod engine;
mod entry;
mod env;
mod error;
mod reserved;
mod table;

pub use engine::AliasEngine;
pub use entry::AliasEntry;
pub use env::{substitute_env, trim_quotes, Environment, ProcessEnv};
pub use error::ExpandError;
pub use reserved::{CollisionMatcher, ReservedCommands};
pub use table::{AliasTable, TableIssue};
