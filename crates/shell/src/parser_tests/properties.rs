// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Property-based tests for lexer and parser invariants.

use crate::parser::Parser;
use crate::token::TokenKind;
use crate::Lexer;
use proptest::prelude::*;

/// Strategy for generating plain shell words (no quotes, no `$`).
fn word_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_./-]{0,10}".prop_map(String::from)
}

/// Strategy for generating simple commands.
fn command_strategy() -> impl Strategy<Value = String> {
    (word_strategy(), prop::collection::vec(word_strategy(), 0..5)).prop_map(|(name, args)| {
        if args.is_empty() {
            name
        } else {
            format!("{} {}", name, args.join(" "))
        }
    })
}

proptest! {
    /// Invariant: every accepted word has a mask entry per character.
    #[test]
    fn mask_length_matches_text(input in "[a-zA-Z0-9 '\"$_.|<>-]{0,40}") {
        if let Ok(tokens) = Lexer::tokenize(&input) {
            for token in tokens {
                if let TokenKind::Word(w) = token.kind {
                    prop_assert_eq!(w.text().chars().count(), w.mask().len());
                }
            }
        }
    }

    /// Invariant: plain words round-trip through the lexer untouched.
    #[test]
    fn plain_words_round_trip(words in prop::collection::vec(word_strategy(), 1..6)) {
        let input = words.join(" ");
        let tokens = Lexer::tokenize(&input).unwrap();
        let texts: Vec<String> = tokens
            .into_iter()
            .map(|t| match t.kind {
                TokenKind::Word(w) => w.into_text(),
                other => panic!("unexpected operator {other} in plain input"),
            })
            .collect();
        prop_assert_eq!(texts, words);
    }

    /// Invariant: quoting a word never changes its surface text.
    #[test]
    fn quoting_preserves_text(word in word_strategy()) {
        let plain = Lexer::tokenize(&word).unwrap();
        let single = Lexer::tokenize(&format!("'{word}'")).unwrap();
        let double = Lexer::tokenize(&format!("\"{word}\"")).unwrap();
        for tokens in [plain, single, double] {
            prop_assert_eq!(tokens.len(), 1);
            let TokenKind::Word(w) = &tokens[0].kind else {
                panic!("expected a word token");
            };
            prop_assert_eq!(w.text(), word.as_str());
        }
    }

    /// Invariant: parsing a valid command succeeds with one pipeline command.
    #[test]
    fn parse_valid_command(input in command_strategy()) {
        let pipeline = Parser::parse(&input).unwrap();
        let pipeline = pipeline.unwrap();
        prop_assert_eq!(pipeline.commands.len(), 1);
    }

    /// Invariant: N piped commands produce N pipeline entries.
    #[test]
    fn pipe_count_matches_command_count(
        cmds in prop::collection::vec(command_strategy(), 1..6)
    ) {
        let input = cmds.join(" | ");
        let pipeline = Parser::parse(&input).unwrap().unwrap();
        prop_assert_eq!(pipeline.commands.len(), cmds.len());
    }

    /// Invariant: blank input parses to nothing.
    #[test]
    fn blank_input_parses_to_none(ws in "[ \t]*") {
        prop_assert!(Parser::parse(&ws).unwrap().is_none());
    }
}
