// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the pipeline parser.

mod errors;
mod pipelines;
mod properties;
mod redirections;

use super::Parser;
use crate::ast::{Pipeline, Redirection};
use crate::parse_error::ParseError;

/// Parse input that must produce a pipeline.
pub(crate) fn parse(input: &str) -> Pipeline {
    Parser::parse(input)
        .unwrap_or_else(|e| panic!("failed to parse {input:?}: {e}"))
        .unwrap_or_else(|| panic!("expected a pipeline for {input:?}"))
}

/// Parse input that must fail.
pub(crate) fn parse_err(input: &str) -> ParseError {
    match Parser::parse(input) {
        Err(e) => e,
        Ok(p) => panic!("expected a parse error for {input:?}, got {p:?}"),
    }
}

/// Argument texts of command `i` in the parsed pipeline.
pub(crate) fn argv(pipeline: &Pipeline, i: usize) -> Vec<&str> {
    pipeline.commands[i].argv.iter().map(|w| w.text()).collect()
}
