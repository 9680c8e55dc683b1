// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `exit` status parsing and exit requests.

use super::super::run;
use super::{args, shell};
use yare::parameterized;

#[test]
fn exit_without_arguments_uses_last_status() {
    let mut sh = shell();
    sh.set_last_status(7);
    assert_eq!(run(&mut sh, &args(&["exit"])), 7);
    assert_eq!(sh.exit_request(), Some(7));
}

#[parameterized(
    zero = { "0", 0 },
    plain = { "42", 42 },
    plus_sign = { "+5", 5 },
    negative_wraps = { "-1", 255 },
    over_256_wraps = { "300", 44 },
    exactly_256 = { "256", 0 },
)]
fn exit_code_is_reduced_modulo_256(arg: &str, expected: i32) {
    let mut sh = shell();
    assert_eq!(run(&mut sh, &args(&["exit", arg])), expected);
    assert_eq!(sh.exit_request(), Some(expected));
}

#[parameterized(
    letters = { "abc" },
    mixed = { "12x" },
    empty = { "" },
    spaced = { "1 2" },
)]
fn non_numeric_argument_exits_with_2(arg: &str) {
    let mut sh = shell();
    assert_eq!(run(&mut sh, &args(&["exit", arg])), 2);
    assert_eq!(sh.exit_request(), Some(2));
}

#[test]
fn too_many_arguments_does_not_exit() {
    let mut sh = shell();
    assert_eq!(run(&mut sh, &args(&["exit", "1", "2"])), 1);
    assert_eq!(sh.exit_request(), None);
}
