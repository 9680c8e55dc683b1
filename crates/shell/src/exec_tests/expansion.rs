// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Expansion semantics: mask gating, `$?`, and field collapsing.

use super::super::expand::{expand_line, expand_pipeline, expand_word};
use super::env_with;
use crate::ast::Redirection;
use crate::parser::Parser;
use crate::word::{QuoteStyle, Word};
use yare::parameterized;

fn expand_text(word: &Word, vars: &[(&str, &str)], status: i32) -> String {
    expand_word(word, &env_with(vars), status).into_text()
}

#[test]
fn substitutes_unquoted_variable() {
    assert_eq!(expand_text(&Word::literal("$X"), &[("X", "42")], 0), "42");
}

#[test]
fn substitutes_double_quoted_variable() {
    assert_eq!(expand_text(&Word::double_quoted("$X"), &[("X", "42")], 0), "42");
}

#[test]
fn single_quoted_dollar_is_literal() {
    assert_eq!(expand_text(&Word::single_quoted("$X"), &[("X", "42")], 0), "$X");
}

#[test]
fn undefined_variable_expands_to_empty() {
    assert_eq!(expand_text(&Word::literal("a${}b"), &[], 0), "a${}b");
    assert_eq!(expand_text(&Word::literal("a$UNDEFb"), &[], 0), "a");
    assert_eq!(expand_text(&Word::literal("$UNDEF"), &[], 0), "");
}

#[test]
fn question_mark_expands_last_status() {
    assert_eq!(expand_text(&Word::literal("$?"), &[], 127), "127");
    assert_eq!(expand_text(&Word::double_quoted("$?"), &[], 0), "0");
}

#[test]
fn adjacent_expansions_concatenate() {
    // `echo "$X$?"` after a success: 42 then 0.
    assert_eq!(expand_text(&Word::double_quoted("$X$?"), &[("X", "42")], 0), "420");
}

#[parameterized(
    bare_dollar = { "$" },
    dollar_digit = { "$1" },
    dollar_dash = { "$-" },
    dollar_dot = { "$." },
)]
fn ineligible_dollar_stays_literal(text: &str) {
    assert_eq!(expand_text(&Word::literal(text), &[("X", "v")], 0), text);
}

#[test]
fn name_scan_is_longest_match() {
    let vars = [("X", "short"), ("XY", "long")];
    assert_eq!(expand_text(&Word::literal("$XY"), &vars, 0), "long");
}

#[test]
fn name_stops_at_non_name_character() {
    assert_eq!(expand_text(&Word::literal("$X.txt"), &[("X", "v")], 0), "v.txt");
}

#[test]
fn name_stops_at_quote_boundary() {
    // `"$X"'Y'`: the single-quoted Y must not extend the name.
    let mut word = Word::double_quoted("$X");
    word.push('Y', QuoteStyle::Single);
    assert_eq!(expand_text(&word, &[("X", "v"), ("XY", "wrong")], 0), "vY");
}

#[test]
fn dollar_at_quote_boundary_stays_literal() {
    // `"$"X`: the dollar's region ends where the quote did.
    let mut word = Word::double_quoted("$");
    word.push('X', QuoteStyle::Unquoted);
    assert_eq!(expand_text(&word, &[("X", "v")], 0), "$X");
}

#[test]
fn words_without_dollars_round_trip() {
    let word = Word::literal("plain-text_123");
    assert_eq!(expand_text(&word, &[("plain", "no")], 0), "plain-text_123");
}

#[test]
fn expanded_value_is_not_rescanned() {
    // A `$` arriving through a value stays literal.
    assert_eq!(expand_text(&Word::literal("$X"), &[("X", "$Y"), ("Y", "no")], 0), "$Y");
}

#[test]
fn empty_unquoted_expansion_is_dropped_from_argv() {
    let mut pipeline = Parser::parse("echo $UNDEF foo").unwrap().unwrap();
    expand_pipeline(&mut pipeline, &env_with(&[]), 0);
    let argv: Vec<_> = pipeline.commands[0].argv.iter().map(|w| w.text()).collect();
    assert_eq!(argv, vec!["echo", "foo"]);
}

#[test]
fn empty_quoted_expansion_stays_in_argv() {
    let mut pipeline = Parser::parse("echo \"$UNDEF\"").unwrap().unwrap();
    expand_pipeline(&mut pipeline, &env_with(&[]), 0);
    let argv: Vec<_> = pipeline.commands[0].argv.iter().map(|w| w.text()).collect();
    assert_eq!(argv, vec!["echo", ""]);
}

#[test]
fn command_name_can_come_from_expansion() {
    let mut pipeline = Parser::parse("$CMD hello").unwrap().unwrap();
    expand_pipeline(&mut pipeline, &env_with(&[("CMD", "echo")]), 0);
    assert_eq!(pipeline.commands[0].name(), Some("echo"));
}

#[test]
fn redirection_targets_are_expanded() {
    let mut pipeline = Parser::parse("echo hi > $OUT").unwrap().unwrap();
    expand_pipeline(&mut pipeline, &env_with(&[("OUT", "/tmp/out")]), 0);
    assert_eq!(pipeline.commands[0].redirections[0].word().text(), "/tmp/out");
}

#[test]
fn heredoc_delimiters_are_never_expanded() {
    let mut pipeline = Parser::parse("cat << $X").unwrap().unwrap();
    expand_pipeline(&mut pipeline, &env_with(&[("X", "END")]), 0);
    let Redirection::HereDoc { delimiter } = &pipeline.commands[0].redirections[0] else {
        panic!("expected a here-document");
    };
    assert_eq!(delimiter.text(), "$X");
}

#[test]
fn every_command_of_a_pipeline_is_expanded() {
    let mut pipeline = Parser::parse("$A | $B").unwrap().unwrap();
    expand_pipeline(&mut pipeline, &env_with(&[("A", "ls"), ("B", "wc")]), 0);
    assert_eq!(pipeline.commands[0].name(), Some("ls"));
    assert_eq!(pipeline.commands[1].name(), Some("wc"));
}

#[test]
fn expand_line_matches_double_quoted_rules() {
    let env = [("USER", "root")];
    assert_eq!(expand_line("hi $USER ($?)", &env_with(&env), 0), "hi root (0)");
    assert_eq!(expand_line("price: $10", &env_with(&env), 0), "price: $10");
}
