// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parser error types.

use crate::error::LexerError;
use crate::span::Span;
use crate::token::TokenKind;
use thiserror::Error;

/// Parser errors for command line syntax.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("lexer error: {0}")]
    Lexer(#[from] LexerError),

    #[error("unexpected token {found} at position {}", span.start)]
    UnexpectedToken { found: TokenKind, span: Span },

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: String },
}

impl ParseError {
    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::Lexer(e) => Some(e.span()),
            ParseError::UnexpectedToken { span, .. } => Some(*span),
            ParseError::UnexpectedEof { .. } => None,
        }
    }

    /// The offending token rendered for a `syntax error near unexpected
    /// token` diagnostic. End of input renders as `'newline'`, matching the
    /// message users know from other shells.
    pub fn near_token(&self) -> Option<String> {
        match self {
            ParseError::Lexer(_) => None,
            ParseError::UnexpectedToken { found, .. } => Some(found.to_string()),
            ParseError::UnexpectedEof { .. } => Some("'newline'".to_string()),
        }
    }
}
