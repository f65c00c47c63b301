// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Alias store loading (INI and TOML) and reserved command lists

mod find;
mod ini;
mod parser;
mod reserved;

pub use find::{format_for_path, load_alias_file, load_reserved_file};
pub use ini::{parse_sections, Sections};
pub use parser::{parse_alias_store, parse_alias_store_with_format, Format, StoreError};
pub use reserved::parse_reserved_commands;
