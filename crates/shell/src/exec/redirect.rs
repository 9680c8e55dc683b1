// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Redirection plumbing onto the standard file descriptors.
//!
//! Used in two places: a forked child wires its own fds before exec, and the
//! parent wires (and afterwards restores) its fds around a builtin that runs
//! without forking.

use std::fs::{File, OpenOptions};
use std::os::fd::{AsRawFd, FromRawFd, OwnedFd, RawFd};

use nix::unistd::{dup, dup2};

use crate::ast::{Command, Redirection};

use super::error::ExecError;
use super::heredoc::HeredocSet;

const STDIN: RawFd = 0;
const STDOUT: RawFd = 1;

/// Apply a command's redirections in declaration order. Later redirections
/// override earlier ones for the same descriptor.
///
/// `index` is the command's position in the pipeline, used to look up its
/// collected here-document fds.
pub(crate) fn apply(
    command: &Command,
    index: usize,
    heredocs: &mut HeredocSet,
) -> Result<(), ExecError> {
    for (ri, redirection) in command.redirections.iter().enumerate() {
        match redirection {
            Redirection::In { source } => {
                let path = source.text();
                let file = File::open(path).map_err(|e| ExecError::redirect(path, &e))?;
                replace_fd(file.as_raw_fd(), STDIN)?;
            }
            Redirection::Out { target, append } => {
                let path = target.text();
                let file = open_write(path, *append)?;
                replace_fd(file.as_raw_fd(), STDOUT)?;
            }
            Redirection::HereDoc { .. } => {
                if let Some(fd) = heredocs.take(index, ri) {
                    replace_fd(fd.as_raw_fd(), STDIN)?;
                }
            }
        }
    }
    Ok(())
}

fn open_write(path: &str, append: bool) -> Result<File, ExecError> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(!append)
        .append(append)
        .open(path)
        .map_err(|e| ExecError::redirect(path, &e))
}

fn replace_fd(from: RawFd, to: RawFd) -> Result<(), ExecError> {
    dup2(from, to).map_err(|source| ExecError::Dup { source })?;
    Ok(())
}

/// Duplicates of stdin and stdout taken before a parent-run builtin's
/// redirections, so the shell's own descriptors survive the command.
pub(crate) struct SavedFds {
    stdin: OwnedFd,
    stdout: OwnedFd,
}

impl SavedFds {
    pub(crate) fn save() -> Result<Self, ExecError> {
        Ok(Self { stdin: dup_owned(STDIN)?, stdout: dup_owned(STDOUT)? })
    }

    pub(crate) fn restore(self) -> Result<(), ExecError> {
        replace_fd(self.stdin.as_raw_fd(), STDIN)?;
        replace_fd(self.stdout.as_raw_fd(), STDOUT)?;
        Ok(())
    }
}

fn dup_owned(fd: RawFd) -> Result<OwnedFd, ExecError> {
    let raw = dup(fd).map_err(|source| ExecError::Dup { source })?;
    // SAFETY: dup returned a fresh descriptor that we now own.
    Ok(unsafe { OwnedFd::from_raw_fd(raw) })
}
