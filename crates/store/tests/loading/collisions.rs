// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

const RESERVED: &str = "\
vm create
vm list
vm show
group list
group show
";

const ALIASES: &str = "\
[vm]
command = virtual machine

[list]
command = group show

[gs {0}]
command = group show -n {0}
";

#[test]
fn alias_shadowing_a_top_level_command_is_suppressed() {
    let dir = tmp();
    let e = engine_from(dir.path(), "alias", ALIASES, RESERVED);
    assert_eq!(expand(&e, &["vm", "create"]), ["vm", "create"]);
}

#[test]
fn alias_expands_where_its_level_is_free() {
    let dir = tmp();
    let e = engine_from(dir.path(), "alias", ALIASES, RESERVED);
    assert_eq!(expand(&e, &["list"]), ["group", "show"]);
}

#[test]
fn alias_at_a_reserved_second_level_is_suppressed() {
    let dir = tmp();
    let e = engine_from(dir.path(), "alias", ALIASES, RESERVED);
    assert_eq!(expand(&e, &["vm", "list"]), ["vm", "list"]);
    assert_eq!(expand(&e, &["group", "list"]), ["group", "list"]);
}

#[test]
fn positional_alias_at_free_level_consumes_its_argument() {
    let dir = tmp();
    let e = engine_from(dir.path(), "alias", ALIASES, RESERVED);
    assert_eq!(
        expand(&e, &["gs", "prod"]),
        ["group", "show", "-n", "prod"]
    );
}
