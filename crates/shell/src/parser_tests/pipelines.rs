// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pipeline and command structure.

use super::*;

#[test]
fn blank_line_parses_to_nothing() {
    assert_eq!(Parser::parse("").unwrap(), None);
    assert_eq!(Parser::parse("   \t ").unwrap(), None);
}

#[test]
fn single_command() {
    let p = parse("echo hello world");
    assert_eq!(p.commands.len(), 1);
    assert_eq!(argv(&p, 0), vec!["echo", "hello", "world"]);
    assert!(p.commands[0].redirections.is_empty());
}

#[test]
fn two_stage_pipeline() {
    let p = parse("ls | wc");
    assert_eq!(p.commands.len(), 2);
    assert_eq!(argv(&p, 0), vec!["ls"]);
    assert_eq!(argv(&p, 1), vec!["wc"]);
}

#[test]
fn three_stage_pipeline() {
    let p = parse("ls | grep . | wc -l");
    assert_eq!(p.commands.len(), 3);
    assert_eq!(argv(&p, 1), vec!["grep", "."]);
    assert_eq!(argv(&p, 2), vec!["wc", "-l"]);
}

#[test]
fn pipelines_never_nest() {
    // Every command in a long chain sits directly in the one pipeline.
    let p = parse("a | b | c | d | e");
    assert_eq!(p.commands.len(), 5);
    for cmd in &p.commands {
        assert_eq!(cmd.argv.len(), 1);
    }
}

#[test]
fn quoted_words_survive_parsing() {
    let p = parse("echo 'a b' \"c d\"");
    assert_eq!(argv(&p, 0), vec!["echo", "a b", "c d"]);
}

#[test]
fn pipeline_span_covers_the_line() {
    let p = parse("ls | wc");
    assert_eq!(p.span.start, 0);
    assert_eq!(p.span.end, 7);
}
