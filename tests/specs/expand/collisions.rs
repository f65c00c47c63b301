//! Reserved command collision and recursion specs

use crate::prelude::*;

const ALIASES: &str = "\
[list]
command = group show

[a]
command = b

[b]
command = a
";

#[test]
fn alias_named_like_reserved_subcommand_stays_literal() {
    Project::with_aliases(ALIASES)
        .aka()
        .args(&["expand", "vm", "list"])
        .passes()
        .stdout_eq("vm\nlist\n")
        .stderr_has("alias collides with a reserved command");
}

#[test]
fn same_alias_expands_outside_the_reserved_position() {
    Project::with_aliases(ALIASES)
        .aka()
        .args(&["expand", "list"])
        .passes()
        .stdout_eq("group\nshow\n")
        .stderr_lacks("collides");
}

#[test]
fn recursive_alias_is_rejected() {
    Project::with_aliases(ALIASES)
        .aka()
        .args(&["expand", "a"])
        .fails()
        .code(1)
        .stdout_eq("")
        .stderr_has("alias 'b' expands to another alias");
}

#[test]
fn without_reserved_list_nothing_collides() {
    let project = Project::empty();
    project.file("alias", ALIASES);
    project
        .aka()
        .args(&["expand", "vm", "list"])
        .passes()
        .stdout_eq("vm\ngroup\nshow\n");
}
