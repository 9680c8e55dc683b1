// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recursive-descent parser turning tokens into a [`Pipeline`].

use crate::ast::{Command, Pipeline, Redirection};
use crate::lexer::Lexer;
use crate::parse_error::ParseError;
use crate::span::Span;
use crate::token::{Token, TokenKind};
use crate::word::Word;

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Parse one input line into a pipeline.
    ///
    /// Returns `Ok(None)` for a blank line (nothing to execute), and an
    /// error for invalid syntax: a leading, trailing, or doubled `|`, or a
    /// redirection operator with no target word.
    pub fn parse(input: &str) -> Result<Option<Pipeline>, ParseError> {
        let tokens = Lexer::tokenize(input)?;
        if tokens.is_empty() {
            return Ok(None);
        }
        let mut parser = Parser { tokens, pos: 0 };
        parser.parse_pipeline().map(Some)
    }

    /// Grammar: command ('|' command)*
    fn parse_pipeline(&mut self) -> Result<Pipeline, ParseError> {
        let start = self.current_span_start();
        let mut commands = vec![self.parse_command()?];

        while self.eat_pipe() {
            commands.push(self.parse_command()?);
        }

        let end = self.previous_span_end();
        Ok(Pipeline { commands, span: Span::new(start, end.max(start)) })
    }

    /// Grammar: (redir | WORD)*
    ///
    /// Words and redirections may interleave freely; declaration order of
    /// redirections is preserved. A command must contain at least one word
    /// or redirection.
    fn parse_command(&mut self) -> Result<Command, ParseError> {
        let start = self.current_span_start();
        let mut argv = Vec::new();
        let mut redirections = Vec::new();

        loop {
            match self.peek() {
                None => break,
                Some(token) if token.kind == TokenKind::Pipe => break,
                Some(token) if token.kind.is_redirection() => {
                    let redirection = self.parse_redirection()?;
                    redirections.push(redirection);
                }
                Some(token) => {
                    let TokenKind::Word(word) = token.kind.clone() else {
                        return Err(self.unexpected_token());
                    };
                    self.advance();
                    argv.push(word);
                }
            }
        }

        if argv.is_empty() && redirections.is_empty() {
            // Reached only via a misplaced `|`: leading, trailing, or doubled.
            return Err(self.unexpected_token());
        }

        let end = self.previous_span_end();
        Ok(Command { argv, redirections, span: Span::new(start, end.max(start)) })
    }

    /// Grammar: ('<' | '>' | '>>' | '<<') WORD
    fn parse_redirection(&mut self) -> Result<Redirection, ParseError> {
        let Some(op) = self.peek().map(|t| t.kind.clone()) else {
            return Err(ParseError::UnexpectedEof { expected: "a redirection operator".into() });
        };
        self.advance();

        let word = self.expect_word()?;
        Ok(match op {
            TokenKind::RedirectIn => Redirection::In { source: word },
            TokenKind::RedirectOut => Redirection::Out { target: word, append: false },
            TokenKind::RedirectAppend => Redirection::Out { target: word, append: true },
            TokenKind::HereDoc => Redirection::HereDoc { delimiter: word },
            // parse_command only dispatches redirection tokens here.
            other => {
                return Err(ParseError::UnexpectedToken {
                    found: other,
                    span: Span::empty(self.previous_span_end()),
                });
            }
        })
    }

    /// Consume a WORD token or report what stood in its place.
    fn expect_word(&mut self) -> Result<Word, ParseError> {
        match self.peek() {
            Some(token) => {
                let TokenKind::Word(word) = token.kind.clone() else {
                    return Err(self.unexpected_token());
                };
                self.advance();
                Ok(word)
            }
            None => Err(ParseError::UnexpectedEof { expected: "a word".into() }),
        }
    }

    /// Consume a `|` token if it is next.
    fn eat_pipe(&mut self) -> bool {
        if matches!(self.peek().map(|t| &t.kind), Some(TokenKind::Pipe)) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn current_span_start(&self) -> usize {
        self.peek().map(|t| t.span.start).unwrap_or(0)
    }

    fn previous_span_end(&self) -> usize {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map(|t| t.span.end)
            .unwrap_or(0)
    }

    /// Build the error for the current position: the token under the cursor,
    /// or end-of-input.
    fn unexpected_token(&self) -> ParseError {
        match self.peek() {
            Some(token) => ParseError::UnexpectedToken {
                found: token.kind.clone(),
                span: token.span,
            },
            None => ParseError::UnexpectedEof { expected: "a command".into() },
        }
    }
}

#[cfg(test)]
#[path = "parser_tests/mod.rs"]
mod tests;
