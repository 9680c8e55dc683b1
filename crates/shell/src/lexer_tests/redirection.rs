// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Redirection operator tokenization.

use super::*;

lex_tests! {
    redirect_in: "< file" => [TokenKind::RedirectIn, word("file")],
    redirect_out: "> file" => [TokenKind::RedirectOut, word("file")],
    redirect_append: ">> file" => [TokenKind::RedirectAppend, word("file")],
    heredoc: "<< END" => [TokenKind::HereDoc, word("END")],
    no_space_before_target: ">file" => [TokenKind::RedirectOut, word("file")],
    no_space_after_word: "echo>x" => [word("echo"), TokenKind::RedirectOut, word("x")],
    append_no_spaces: "a>>b" => [word("a"), TokenKind::RedirectAppend, word("b")],
    heredoc_no_spaces: "cat<<END" => [word("cat"), TokenKind::HereDoc, word("END")],
    redirect_then_command: "> out echo done" => [
        TokenKind::RedirectOut,
        word("out"),
        word("echo"),
        word("done"),
    ],
    quoted_heredoc_delimiter: "cat << 'END'" => [
        word("cat"),
        TokenKind::HereDoc,
        word_of(&[("END", QuoteStyle::Single)]),
    ],
    redirections_and_pipe: "< in cat | wc > out" => [
        TokenKind::RedirectIn,
        word("in"),
        word("cat"),
        TokenKind::Pipe,
        word("wc"),
        TokenKind::RedirectOut,
        word("out"),
    ],
    // Maximal munch: << beats <; a third < starts a new operator.
    triple_less: "<<<" => [TokenKind::HereDoc, TokenKind::RedirectIn],
    triple_greater: ">>>" => [TokenKind::RedirectAppend, TokenKind::RedirectOut],
    // No fd-prefix support: `2>` is the word `2` followed by `>`.
    fd_prefix_is_a_word: "2> err" => [word("2"), TokenKind::RedirectOut, word("err")],
}

span_tests! {
    redirect_spans: "> out" => [(0, 1), (2, 5)],
    append_spans: "a >> b" => [(0, 1), (2, 4), (5, 6)],
    heredoc_spans: "<< END" => [(0, 2), (3, 6)],
}
