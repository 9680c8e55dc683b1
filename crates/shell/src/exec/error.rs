// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution error types.
//!
//! These cover the parent-side failures that abandon a line (pipe/fork) and
//! the per-command failures a child reports before `_exit`. Display output
//! is written for the `minishell: ` diagnostic prefix.

use std::io;

/// Errors that can occur while realizing a pipeline as processes.
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    /// pipe(2) failed; the whole line is abandoned.
    #[error("pipe: {source}")]
    Pipe { source: nix::Error },

    /// fork(2) failed; the whole line is abandoned.
    #[error("fork: {source}")]
    Fork { source: nix::Error },

    /// waitpid(2) failed while reaping a child.
    #[error("wait: {source}")]
    Wait { source: nix::Error },

    /// Changing signal dispositions failed.
    #[error("sigaction: {source}")]
    Signal { source: nix::Error },

    /// A redirection target could not be opened.
    #[error("{path}: {message}")]
    Redirect { path: String, message: String },

    /// Duplicating a file descriptor failed.
    #[error("dup2: {source}")]
    Dup { source: nix::Error },

    /// Here-document collection was interrupted by SIGINT; the line is
    /// abandoned with status 130.
    #[error("here-document interrupted")]
    HeredocInterrupted,

    /// Reading or buffering a here-document body failed.
    #[error("here-document: {source}")]
    Heredoc { source: io::Error },
}

impl ExecError {
    pub(crate) fn redirect(path: &str, err: &io::Error) -> Self {
        Self::Redirect { path: path.to_string(), message: errno_message(err) }
    }
}

/// The bare strerror text, without the `(os error N)` suffix `io::Error`
/// appends; shell diagnostics read like `minishell: out.txt: Permission
/// denied`.
pub(crate) fn errno_message(err: &io::Error) -> String {
    match err.raw_os_error() {
        Some(code) => nix::errno::Errno::from_raw(code).desc().to_string(),
        None => err.to_string(),
    }
}
