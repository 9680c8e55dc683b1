// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `export`, `unset`, `env`, and `cd` argument handling.

use super::super::{export, run};
use super::{args, shell};

#[test]
fn export_assigns_a_value() {
    let mut sh = shell();
    let status = run(&mut sh, &args(&["export", "X=42"]));
    assert_eq!(status, 0);
    assert_eq!(sh.env().get("X"), Some("42"));
}

#[test]
fn export_bare_name_declares_unvalued() {
    let mut sh = shell();
    assert_eq!(run(&mut sh, &args(&["export", "MARKER"])), 0);
    assert_eq!(sh.env().get("MARKER"), None);
    assert_eq!(sh.env().iter().count(), 1);
}

#[test]
fn export_appends_with_plus_equals() {
    let mut sh = shell();
    run(&mut sh, &args(&["export", "X=a"]));
    run(&mut sh, &args(&["export", "X+=b"]));
    assert_eq!(sh.env().get("X"), Some("ab"));
}

#[test]
fn export_value_may_contain_equals() {
    let mut sh = shell();
    run(&mut sh, &args(&["export", "X=a=b"]));
    assert_eq!(sh.env().get("X"), Some("a=b"));
}

#[test]
fn export_invalid_identifier_fails_but_continues() {
    let mut sh = shell();
    let status = run(&mut sh, &args(&["export", "2bad=1", "GOOD=2"]));
    assert_eq!(status, 1);
    assert_eq!(sh.env().get("GOOD"), Some("2"));
    assert_eq!(sh.env().get("2bad"), None);
}

#[test]
fn export_empty_value() {
    let mut sh = shell();
    assert_eq!(run(&mut sh, &args(&["export", "X="])), 0);
    assert_eq!(sh.env().get("X"), Some(""));
}

#[test]
fn export_listing_is_sorted_and_formatted() {
    let mut sh = shell();
    sh.env_mut().set("B", "2");
    sh.env_mut().set("A", "1");
    sh.env_mut().set_unvalued("BARE");

    assert_eq!(
        export::listing(sh.env()),
        vec![
            "declare -x A=\"1\"".to_string(),
            "declare -x B=\"2\"".to_string(),
            "declare -x BARE".to_string(),
        ]
    );
}

#[test]
fn unset_removes_a_variable() {
    let mut sh = shell();
    sh.env_mut().set("X", "1");
    assert_eq!(run(&mut sh, &args(&["unset", "X"])), 0);
    assert_eq!(sh.env().get("X"), None);
    assert_eq!(sh.env().iter().count(), 0);
}

#[test]
fn unset_without_arguments_succeeds() {
    let mut sh = shell();
    assert_eq!(run(&mut sh, &args(&["unset"])), 0);
}

#[test]
fn unset_only_invalid_names_fails() {
    let mut sh = shell();
    assert_eq!(run(&mut sh, &args(&["unset", "1x", "a-b"])), 1);
}

#[test]
fn unset_mixed_names_still_succeeds() {
    let mut sh = shell();
    sh.env_mut().set("X", "1");
    assert_eq!(run(&mut sh, &args(&["unset", "1x", "X"])), 0);
    assert_eq!(sh.env().get("X"), None);
}

#[test]
fn env_with_arguments_is_refused() {
    let mut sh = shell();
    assert_eq!(run(&mut sh, &args(&["env", "ls"])), 127);
}

#[test]
fn cd_without_arguments_is_a_noop_success() {
    let mut sh = shell();
    let before = std::env::current_dir().unwrap();
    assert_eq!(run(&mut sh, &args(&["cd"])), 0);
    assert_eq!(std::env::current_dir().unwrap(), before);
}

#[test]
fn cd_to_missing_directory_fails() {
    let mut sh = shell();
    assert_eq!(run(&mut sh, &args(&["cd", "/nonexistent-minishell-dir"])), 1);
}

#[test]
fn cd_with_too_many_arguments_fails_without_moving() {
    let mut sh = shell();
    let before = std::env::current_dir().unwrap();
    assert_eq!(run(&mut sh, &args(&["cd", "/tmp", "/var"])), 1);
    assert_eq!(std::env::current_dir().unwrap(), before);
}
