// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the environment table.

use super::{is_valid_name, Environment};
use yare::parameterized;

#[test]
fn set_then_get() {
    let mut env = Environment::new();
    env.set("X", "42");
    assert_eq!(env.get("X"), Some("42"));
}

#[test]
fn get_unset_is_none() {
    let env = Environment::new();
    assert_eq!(env.get("MISSING"), None);
}

#[test]
fn update_keeps_insertion_position() {
    let mut env = Environment::new();
    env.set("A", "1");
    env.set("B", "2");
    env.set("A", "changed");

    let names: Vec<_> = env.iter().map(|(k, _)| k).collect();
    assert_eq!(names, vec!["A", "B"]);
    assert_eq!(env.get("A"), Some("changed"));
}

#[test]
fn uniqueness_by_name() {
    let mut env = Environment::new();
    env.set("X", "1");
    env.set("X", "2");
    assert_eq!(env.len(), 1);
}

#[test]
fn unvalued_declaration() {
    let mut env = Environment::new();
    env.set_unvalued("MARKER");
    assert_eq!(env.get("MARKER"), None);
    assert_eq!(env.iter().count(), 1);
}

#[test]
fn unvalued_never_clobbers_a_value() {
    let mut env = Environment::new();
    env.set("X", "keep");
    env.set_unvalued("X");
    assert_eq!(env.get("X"), Some("keep"));
}

#[test]
fn append_to_existing() {
    let mut env = Environment::new();
    env.set("PATH", "/bin");
    env.append("PATH", ":/usr/bin");
    assert_eq!(env.get("PATH"), Some("/bin:/usr/bin"));
}

#[test]
fn append_to_missing_behaves_as_empty() {
    let mut env = Environment::new();
    env.append("X", "tail");
    assert_eq!(env.get("X"), Some("tail"));
}

#[test]
fn unset_removes_and_preserves_order() {
    let mut env = Environment::new();
    env.set("A", "1");
    env.set("B", "2");
    env.set("C", "3");
    env.unset("B");

    let names: Vec<_> = env.iter().map(|(k, _)| k).collect();
    assert_eq!(names, vec!["A", "C"]);
}

#[test]
fn unset_missing_is_a_noop() {
    let mut env = Environment::new();
    env.set("A", "1");
    env.unset("NOPE");
    assert_eq!(env.len(), 1);
}

#[test]
fn snapshot_contains_only_valued_entries() {
    let mut env = Environment::new();
    env.set("A", "1");
    env.set_unvalued("BARE");
    env.set("B", "2");

    let snapshot: Vec<String> = env
        .snapshot()
        .into_iter()
        .map(|c| c.into_string().unwrap())
        .collect();
    assert_eq!(snapshot, vec!["A=1", "B=2"]);
}

#[test]
fn snapshot_skips_nul_values() {
    let mut env = Environment::new();
    env.set("BAD", "a\0b");
    env.set("OK", "fine");
    assert_eq!(env.snapshot().len(), 1);
}

#[parameterized(
    plain = { "NAME", true },
    underscore_start = { "_x", true },
    digits_inside = { "A9", true },
    lone_underscore = { "_", true },
    empty = { "", false },
    digit_start = { "9A", false },
    dash = { "A-B", false },
    space = { "A B", false },
    equals = { "A=B", false },
)]
fn name_validation(name: &str, ok: bool) {
    assert_eq!(is_valid_name(name), ok);
}
