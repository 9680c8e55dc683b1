// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Quote handling: stripping, masks, and fragment concatenation.

use super::*;

lex_tests! {
    single_quoted_word: "'hello'" => [word_of(&[("hello", QuoteStyle::Single)])],
    double_quoted_word: "\"hello\"" => [word_of(&[("hello", QuoteStyle::Double)])],
    single_quotes_keep_dollar: "'$HOME'" => [word_of(&[("$HOME", QuoteStyle::Single)])],
    double_quotes_keep_dollar_as_data: "\"$HOME\"" => [word_of(&[("$HOME", QuoteStyle::Double)])],
    single_inside_double: "\"a'b'c\"" => [word_of(&[("a'b'c", QuoteStyle::Double)])],
    double_inside_single: "'a\"b\"c'" => [word_of(&[("a\"b\"c", QuoteStyle::Single)])],
    spaces_inside_quotes: "'a b' c" => [word_of(&[("a b", QuoteStyle::Single)]), word("c")],
    operators_inside_quotes: "'a|b<c>d'" => [word_of(&[("a|b<c>d", QuoteStyle::Single)])],
    adjacent_fragments_one_word: "a\"b\"'c'" => [word_of(&[
        ("a", QuoteStyle::Unquoted),
        ("b", QuoteStyle::Double),
        ("c", QuoteStyle::Single),
    ])],
    quoted_then_unquoted: "\"a\"b" => [word_of(&[
        ("a", QuoteStyle::Double),
        ("b", QuoteStyle::Unquoted),
    ])],
    two_quoted_words: "'a' 'b'" => [
        word_of(&[("a", QuoteStyle::Single)]),
        word_of(&[("b", QuoteStyle::Single)]),
    ],
}

#[test]
fn empty_quotes_keep_an_empty_word() {
    let tokens = Lexer::tokenize("\"\"").unwrap();
    assert_eq!(tokens.len(), 1);
    let TokenKind::Word(w) = &tokens[0].kind else {
        panic!("expected a word token");
    };
    assert!(w.is_empty());
    assert!(w.has_quotes());
}

#[test]
fn empty_single_quotes_attached_to_word() {
    let tokens = Lexer::tokenize("a''b").unwrap();
    assert_eq!(tokens.len(), 1);
    let TokenKind::Word(w) = &tokens[0].kind else {
        panic!("expected a word token");
    };
    assert_eq!(w.text(), "ab");
    assert!(w.has_quotes());
}

#[test]
fn spec_example_mask() {
    // a"b"'c' → one WORD, text abc, mask unquoted/double/single.
    let tokens = Lexer::tokenize("a\"b\"'c'").unwrap();
    let TokenKind::Word(w) = &tokens[0].kind else {
        panic!("expected a word token");
    };
    assert_eq!(w.text(), "abc");
    assert_eq!(
        w.mask(),
        &[QuoteStyle::Unquoted, QuoteStyle::Double, QuoteStyle::Single]
    );
}

#[test]
fn quote_characters_never_reach_the_text() {
    let tokens = Lexer::tokenize("\"a\"'b'c").unwrap();
    let TokenKind::Word(w) = &tokens[0].kind else {
        panic!("expected a word token");
    };
    assert!(!w.text().contains('\''));
    assert!(!w.text().contains('"'));
}
