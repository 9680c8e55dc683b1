// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Basic tokenization: words, whitespace, and the pipe operator.

use super::*;

lex_tests! {
    empty_input: "" => [],
    only_spaces: "   " => [],
    only_tabs: "\t\t" => [],
    single_word: "echo" => [word("echo")],
    two_words: "echo hello" => [word("echo"), word("hello")],
    collapsed_spaces: "echo   hello    world" => [word("echo"), word("hello"), word("world")],
    tabs_separate_words: "echo\thello" => [word("echo"), word("hello")],
    leading_whitespace: "   ls" => [word("ls")],
    trailing_whitespace: "ls   " => [word("ls")],
    pipe_between_words: "ls | wc" => [word("ls"), TokenKind::Pipe, word("wc")],
    pipe_without_spaces: "ls|wc" => [word("ls"), TokenKind::Pipe, word("wc")],
    three_stage_pipeline: "ls | grep . | wc -l" => [
        word("ls"),
        TokenKind::Pipe,
        word("grep"),
        word("."),
        TokenKind::Pipe,
        word("wc"),
        word("-l"),
    ],
    lone_pipe: "|" => [TokenKind::Pipe],
    consecutive_pipes: "||" => [TokenKind::Pipe, TokenKind::Pipe],
    dollar_is_plain_data: "echo $HOME" => [word("echo"), word("$HOME")],
    punctuation_in_words: "a.b-c_d/e" => [word("a.b-c_d/e")],
    utf8_word: "echo héllo" => [word("echo"), word("héllo")],
}

span_tests! {
    word_spans: "echo hi" => [(0, 4), (5, 7)],
    pipe_span: "a | b" => [(0, 1), (2, 3), (4, 5)],
    leading_space_span: "  ls" => [(2, 4)],
}

#[test]
fn mask_length_matches_text_length() {
    let tokens = Lexer::tokenize("plain 'sq' \"dq\" a'b'\"c\"").unwrap();
    for token in &tokens {
        if let TokenKind::Word(w) = &token.kind {
            assert_eq!(
                w.text().chars().count(),
                w.mask().len(),
                "word {:?} has a mismatched mask",
                w.text()
            );
        }
    }
}
