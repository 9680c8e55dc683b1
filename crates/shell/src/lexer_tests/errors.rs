// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tokenization error cases.

use super::*;

lex_error_tests! {
    lone_single_quote: "'" => LexerError::UnterminatedSingleQuote { .. },
    lone_double_quote: "\"" => LexerError::UnterminatedDoubleQuote { .. },
    unterminated_single: "echo 'abc" => LexerError::UnterminatedSingleQuote { .. },
    unterminated_double: "echo \"abc" => LexerError::UnterminatedDoubleQuote { .. },
    double_open_inside_word: "a\"bc" => LexerError::UnterminatedDoubleQuote { .. },
    reopened_quote: "'a' 'b" => LexerError::UnterminatedSingleQuote { .. },
    single_hides_double_close: "'\"'\"" => LexerError::UnterminatedDoubleQuote { .. },
}

#[test]
fn error_span_points_at_the_opening_quote() {
    let err = Lexer::tokenize("echo 'oops").unwrap_err();
    assert_eq!(err.span().start, 5);
}
