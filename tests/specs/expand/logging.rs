//! Console logging specs

use crate::prelude::*;

const ALIASES: &str = "[gl]\ncommand = group list\n";

#[test]
fn quiet_by_default() {
    Project::with_aliases(ALIASES)
        .aka()
        .args(&["expand", "gl"])
        .passes()
        .stderr_eq("");
}

#[test]
fn debug_flag_traces_the_transformation() {
    Project::with_aliases(ALIASES)
        .aka()
        .args(&["--debug", "expand", "gl"])
        .passes()
        .stdout_eq("group\nlist\n")
        .stderr_has("alias transformation")
        .stderr_has("elapsed_us");
}

#[test]
fn rust_log_is_honored_without_flags() {
    Project::with_aliases(ALIASES)
        .aka()
        .env("RUST_LOG", "debug")
        .args(&["expand", "gl"])
        .passes()
        .stderr_has("alias transformation");
}

#[test]
fn identity_expansion_is_not_traced() {
    Project::with_aliases(ALIASES)
        .aka()
        .args(&["--debug", "expand", "vm", "list"])
        .passes()
        .stderr_lacks("alias transformation");
}
