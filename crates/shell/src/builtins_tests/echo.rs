// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `echo` rendering and flag handling.

use super::super::echo::{parse_flags, render};
use super::args;
use yare::parameterized;

#[test]
fn joins_arguments_with_single_spaces() {
    assert_eq!(render(&args(&["hello", "world"]), true), "hello world\n");
}

#[test]
fn no_arguments_is_a_bare_newline() {
    assert_eq!(render(&[], true), "\n");
}

#[test]
fn suppressed_newline() {
    assert_eq!(render(&args(&["hi"]), false), "hi");
}

#[test]
fn arguments_keep_their_inner_spacing() {
    // Quoted arguments arrive as single words; their spaces survive.
    assert_eq!(render(&args(&["a  b"]), true), "a  b\n");
}

#[parameterized(
    plain_n = { &["-n", "hi"], false, &["hi"] },
    repeated_n = { &["-nnn", "hi"], false, &["hi"] },
    several_flags = { &["-n", "-nn", "hi"], false, &["hi"] },
    no_flag = { &["hi", "-n"], true, &["hi", "-n"] },
    dash_alone_is_an_argument = { &["-", "x"], true, &["-", "x"] },
    other_flag_is_an_argument = { &["-x", "y"], true, &["-x", "y"] },
    mixed_suffix_is_an_argument = { &["-nx"], true, &["-nx"] },
)]
fn flag_parsing(input: &[&str], newline: bool, rest: &[&str]) {
    let input = args(input);
    let (parsed_newline, parsed_rest) = parse_flags(&input);
    assert_eq!(parsed_newline, newline);
    let rest_texts: Vec<&str> = parsed_rest.iter().map(|s| s.as_str()).collect();
    assert_eq!(rest_texts, rest);
}
