// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The shell executor: owns the environment and `$?`, and drives one line
//! from text to reaped processes.
//!
//! Each line goes through lex → parse → expand → here-document collection →
//! execution. Commands in a pipeline are forked left to right and connected
//! by pipes; redirections are applied inside each child in declaration
//! order; the pipeline's exit status is the rightmost command's.
//!
//! # Example
//!
//! ```no_run
//! use minishell_core::Shell;
//!
//! let mut shell = Shell::new(false);
//! let status = shell.run_line("echo hello | wc -c");
//! assert_eq!(status, 0);
//! assert_eq!(shell.last_status(), 0);
//! ```
//!
//! # Builtins and shell state
//!
//! A builtin alone in its pipeline runs in the parent process, so `cd`,
//! `export`, `unset`, and `exit` mutate the shell itself. In a
//! multi-command pipeline the builtin runs inside its fork and its side
//! effects are isolated.
//!
//! # Unsupported features
//!
//! Job control, `&&`/`||`/`;`, subshells, globbing, command substitution,
//! and word splitting are not part of this shell's language.

pub mod error;
mod expand;
mod heredoc;
mod path;
mod redirect;
mod run;

pub use error::ExecError;

use crate::env::Environment;
use crate::parse_error::ParseError;
use crate::parser::Parser;

/// Shell state surviving across lines: the environment table, the last
/// exit status (`$?`), and whether `exit` has been requested.
#[derive(Debug)]
pub struct Shell {
    pub(crate) env: Environment,
    pub(crate) last_status: i32,
    pub(crate) interactive: bool,
    pub(crate) exit_request: Option<i32>,
}

impl Shell {
    /// A shell seeded from the process environment.
    pub fn new(interactive: bool) -> Self {
        Self::with_env(Environment::from_process(), interactive)
    }

    /// A shell with an explicit environment (tests, embedding).
    pub fn with_env(env: Environment, interactive: bool) -> Self {
        Self { env, last_status: 0, interactive, exit_request: None }
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    /// The status exposed as `$?`.
    pub fn last_status(&self) -> i32 {
        self.last_status
    }

    /// Record a status produced outside of `run_line` (Ctrl-C at the
    /// prompt).
    pub fn set_last_status(&mut self, status: i32) {
        self.last_status = status;
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Set when the `exit` builtin ran; the REPL leaves its loop.
    pub fn exit_request(&self) -> Option<i32> {
        self.exit_request
    }

    pub(crate) fn request_exit(&mut self, code: i32) {
        self.exit_request = Some(code);
    }

    /// Run one input line end to end and record its exit status.
    ///
    /// Every error path (bad syntax, failed redirection, interrupted
    /// here-document, dead child) resolves to a status; the tokens, tree,
    /// and here-document fds of the line are released before returning.
    pub fn run_line(&mut self, line: &str) -> i32 {
        let span = tracing::info_span!("shell.line", status = tracing::field::Empty);
        let _guard = span.enter();

        let status = self.run_line_inner(line);
        span.record("status", status);
        self.last_status = status;
        status
    }

    fn run_line_inner(&mut self, line: &str) -> i32 {
        let mut pipeline = match Parser::parse(line) {
            Ok(Some(pipeline)) => pipeline,
            Ok(None) => return self.last_status,
            Err(err) => {
                report_parse_error(&err);
                return 2;
            }
        };

        expand::expand_pipeline(&mut pipeline, &self.env, self.last_status);

        let heredocs = match heredoc::collect(&pipeline, &self.env, self.last_status, self.interactive)
        {
            Ok(set) => set,
            Err(ExecError::HeredocInterrupted) => {
                let _ = std::io::Write::write_all(&mut std::io::stdout(), b"\n");
                return 130;
            }
            Err(err) => {
                eprintln!("minishell: {err}");
                return 1;
            }
        };

        match run::execute(self, &pipeline, heredocs) {
            Ok(status) => status,
            Err(err) => {
                eprintln!("minishell: {err}");
                1
            }
        }
    }
}

fn report_parse_error(err: &ParseError) {
    match err {
        ParseError::Lexer(lex) => eprintln!("minishell: syntax error: {lex}"),
        other => {
            if let Some(token) = other.near_token() {
                eprintln!("minishell: syntax error near unexpected token {token}");
            }
        }
    }
}

#[cfg(test)]
#[path = "../exec_tests/mod.rs"]
mod tests;
