// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Interactive here-document collection.
//!
//! Every `<<` redirection is materialized before any fork: the shell itself
//! reads the body lines under the prompt-phase signal regime, buffers them
//! into an anonymous pipe, and keeps the read end to attach as the child's
//! stdin at exec time.

use std::fs::File;
use std::io::Write;
use std::os::fd::OwnedFd;

use nix::unistd::pipe;

use crate::ast::{Pipeline, Redirection};
use crate::env::Environment;
use crate::input::LineReader;
use crate::signals;

use super::error::ExecError;
use super::expand;

/// Collected here-document bodies: one optional fd slot per redirection,
/// indexed by command position and redirection position.
pub(crate) struct HeredocSet {
    slots: Vec<Vec<Option<OwnedFd>>>,
}

impl HeredocSet {
    /// Take the collected fd for a redirection, if it was a here-document.
    pub(crate) fn take(&mut self, command: usize, redirection: usize) -> Option<OwnedFd> {
        self.slots.get_mut(command)?.get_mut(redirection)?.take()
    }

    /// Close every remaining fd. A forked child calls this after taking its
    /// own so that sibling here-documents do not leak through execve.
    pub(crate) fn close_all(&mut self) {
        for command_slots in &mut self.slots {
            for slot in command_slots {
                slot.take();
            }
        }
    }
}

/// Read every here-document of the pipeline, in command order.
///
/// Ctrl-C abandons the whole line: the prompt-phase SIGINT handler is
/// installed without `SA_RESTART`, so the blocking read returns `EINTR` and
/// collection reports [`ExecError::HeredocInterrupted`].
pub(crate) fn collect(
    pipeline: &Pipeline,
    env: &Environment,
    last_status: i32,
    interactive: bool,
) -> Result<HeredocSet, ExecError> {
    let mut slots = Vec::with_capacity(pipeline.commands.len());
    for command in &pipeline.commands {
        let mut command_slots = Vec::with_capacity(command.redirections.len());
        for redirection in &command.redirections {
            let slot = match redirection {
                Redirection::HereDoc { delimiter } => {
                    let body = read_body(
                        delimiter.text(),
                        !delimiter.has_quotes(),
                        env,
                        last_status,
                        interactive,
                    )?;
                    Some(into_pipe(&body)?)
                }
                _ => None,
            };
            command_slots.push(slot);
        }
        slots.push(command_slots);
    }
    Ok(HeredocSet { slots })
}

/// Read lines until one equals the delimiter exactly.
///
/// An unquoted delimiter turns on `$NAME` / `$?` expansion for each body
/// line. End of input before the delimiter keeps the partial body, with a
/// warning.
fn read_body(
    delimiter: &str,
    expand_body: bool,
    env: &Environment,
    last_status: i32,
    interactive: bool,
) -> Result<String, ExecError> {
    let mut body = String::new();
    let mut stdin = LineReader::new();

    loop {
        if signals::take().is_some() {
            return Err(ExecError::HeredocInterrupted);
        }
        if interactive {
            prompt();
        }
        match stdin.read_line() {
            Ok(None) => {
                eprintln!(
                    "minishell: warning: here-document delimited by end-of-file (wanted '{delimiter}')"
                );
                break;
            }
            Ok(Some(line)) => {
                if line == delimiter {
                    break;
                }
                if expand_body {
                    body.push_str(&expand::expand_line(&line, env, last_status));
                } else {
                    body.push_str(&line);
                }
                body.push('\n');
            }
            Err(err) if err.kind() == std::io::ErrorKind::Interrupted => {
                if signals::take().is_some() {
                    return Err(ExecError::HeredocInterrupted);
                }
            }
            Err(err) => return Err(ExecError::Heredoc { source: err }),
        }
    }
    Ok(body)
}

/// Secondary prompt for continuation lines.
fn prompt() {
    let mut out = std::io::stdout();
    let _ = out.write_all(b"> ");
    let _ = out.flush();
}

/// Buffer a body into an anonymous pipe, returning the read end.
fn into_pipe(body: &str) -> Result<OwnedFd, ExecError> {
    let (read, write) = pipe().map_err(|source| ExecError::Pipe { source })?;
    let mut writer = File::from(write);
    writer
        .write_all(body.as_bytes())
        .map_err(|source| ExecError::Heredoc { source })?;
    Ok(read)
}
