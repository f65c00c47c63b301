//! Error reporting and exit code specs

use crate::prelude::*;

#[test]
fn unknown_subcommand_fails() {
    cli().args(&["frobnicate"]).fails().code(2);
}

#[test]
fn malformed_alias_file_reports_line() {
    let project = Project::with_aliases("[gl]\ncommand = group list\nnot a pair\n");
    project
        .aka()
        .args(&["expand", "gl"])
        .fails()
        .code(1)
        .stderr_has("Error: failed to load alias file")
        .stderr_has("syntax error on line 3");
}

#[test]
fn malformed_toml_alias_file_fails() {
    let project = Project::empty();
    project.file("aliases.toml", "[gl\ncommand = 1\n");
    let path = project.path().join("aliases.toml");
    cli()
        .env("AKA_ALIAS_FILE", &path)
        .args(&["list"])
        .fails()
        .stderr_has("TOML parse error");
}

#[test]
fn missing_reserved_file_fails() {
    let project = Project::with_aliases("[gl]\ncommand = group list\n");
    let missing = project.path().join("nope");
    project
        .aka()
        .env("AKA_RESERVED_FILE", &missing)
        .args(&["expand", "gl"])
        .fails()
        .stderr_has("failed to load reserved commands");
}

#[test]
fn missing_alias_file_is_an_empty_table() {
    Project::empty()
        .aka()
        .args(&["expand", "vm", "list"])
        .passes()
        .stdout_eq("vm\nlist\n");
}

#[test]
fn failed_expansion_prints_nothing_on_stdout() {
    let project = Project::with_aliases("[cm {0} {1}]\ncommand = vm create -g {0} -n {1}\n");
    project
        .aka()
        .args(&["expand", "cm", "rg"])
        .fails()
        .code(1)
        .stdout_eq("")
        .stderr_has("Error: inconsistent placeholder indexing in alias 'cm'");
}
