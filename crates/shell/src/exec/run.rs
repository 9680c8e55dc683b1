// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pipeline realization: fork one child per command, wire the pipes, reap
//! in spawn order.

use std::ffi::CString;
use std::io::Write;
use std::os::fd::{AsRawFd, OwnedFd};
use std::os::unix::ffi::OsStrExt;

use nix::sys::signal::Signal;
use nix::sys::wait::{waitpid, WaitStatus};
use nix::unistd::{dup2, execve, fork, pipe, ForkResult, Pid};

use crate::ast::{Command, Pipeline};
use crate::builtins;
use crate::signals;

use super::error::ExecError;
use super::heredoc::HeredocSet;
use super::path::{self, Resolved};
use super::redirect::{self, SavedFds};
use super::Shell;

/// Execute an expanded pipeline, returning the status of its last command.
pub(crate) fn execute(
    shell: &mut Shell,
    pipeline: &Pipeline,
    mut heredocs: HeredocSet,
) -> Result<i32, ExecError> {
    // A builtin alone in its pipeline runs in the parent so its side
    // effects (cd, export, unset, exit) survive the line.
    if let [command] = pipeline.commands.as_slice() {
        if command.name().is_some_and(|name| builtins::find(name).is_some()) {
            return run_builtin_in_parent(shell, command, &mut heredocs);
        }
    }
    run_pipeline(shell, pipeline, heredocs)
}

/// The singleton-builtin carve-out: wire redirections onto the shell's own
/// fds, run the builtin, restore the fds.
fn run_builtin_in_parent(
    shell: &mut Shell,
    command: &Command,
    heredocs: &mut HeredocSet,
) -> Result<i32, ExecError> {
    let saved = SavedFds::save()?;

    if let Err(err) = redirect::apply(command, 0, heredocs) {
        saved.restore()?;
        eprintln!("minishell: {err}");
        return Ok(1);
    }

    let argv = command_argv(command);
    let status = builtins::run(shell, &argv);
    let _ = std::io::stdout().flush();
    saved.restore()?;
    Ok(status)
}

fn command_argv(command: &Command) -> Vec<String> {
    command.argv.iter().map(|w| w.text().to_string()).collect()
}

fn run_pipeline(
    shell: &mut Shell,
    pipeline: &Pipeline,
    mut heredocs: HeredocSet,
) -> Result<i32, ExecError> {
    let n = pipeline.commands.len();
    let span = tracing::info_span!("shell.pipeline", commands = n, status = tracing::field::Empty);
    let _guard = span.enter();

    signals::enter_wait_phase().map_err(|source| ExecError::Signal { source })?;

    let mut children: Vec<Pid> = Vec::with_capacity(n);
    let mut prev_read: Option<OwnedFd> = None;
    let mut spawn_error = None;

    for (i, command) in pipeline.commands.iter().enumerate() {
        let next = if i + 1 < n {
            match pipe() {
                Ok(fds) => Some(fds),
                Err(source) => {
                    spawn_error = Some(ExecError::Pipe { source });
                    break;
                }
            }
        } else {
            None
        };

        // SAFETY: the shell is single-threaded; between fork and execve the
        // child only touches its own copy of memory and its fd table.
        match unsafe { fork() } {
            Ok(ForkResult::Child) => {
                let stdin = prev_read.take();
                let stdout = next.map(|(read, write)| {
                    drop(read);
                    write
                });
                let code = run_child(shell, command, i, &mut heredocs, stdin, stdout);
                let _ = std::io::stdout().flush();
                let _ = std::io::stderr().flush();
                std::process::exit(code);
            }
            Ok(ForkResult::Parent { child }) => {
                tracing::debug!(
                    pid = child.as_raw(),
                    cmd = command.name().unwrap_or_default(),
                    "spawned pipeline command"
                );
                children.push(child);
                // Keep only the read end for the next command; the write
                // end now belongs to the child just spawned.
                prev_read = next.map(|(read, write)| {
                    drop(write);
                    read
                });
            }
            Err(source) => {
                spawn_error = Some(ExecError::Fork { source });
                break;
            }
        }
    }

    // Every parent pipe copy must be closed before the first wait, or the
    // readers would never see EOF.
    drop(prev_read);
    heredocs.close_all();

    let reaped = reap(&children);
    let _ = signals::enter_prompt_phase();

    if let Some(err) = spawn_error {
        return Err(err);
    }
    let status = reaped?;
    span.record("status", status);
    Ok(status)
}

/// Wait for each child in spawn order; the pipeline's status is the last
/// command's. A SIGINT-terminated child leaves the cursor mid-line, so the
/// shell prints the newline the user expects.
fn reap(children: &[Pid]) -> Result<i32, ExecError> {
    let mut status = 0;
    let mut interrupted = false;

    for &pid in children {
        status = match waitpid(pid, None) {
            Ok(WaitStatus::Exited(_, code)) => code,
            Ok(WaitStatus::Signaled(_, signal, _)) => {
                if signal == Signal::SIGINT {
                    interrupted = true;
                }
                128 + signal as i32
            }
            Ok(_) => 1,
            Err(source) => return Err(ExecError::Wait { source }),
        };
        tracing::debug!(pid = pid.as_raw(), status, "reaped pipeline command");
    }

    if interrupted {
        let _ = std::io::stdout().write_all(b"\n");
    }
    Ok(status)
}

/// Everything the child does between fork and exec. Returns an exit code
/// only on failure or for builtins; on success execve never returns.
fn run_child(
    shell: &mut Shell,
    command: &Command,
    index: usize,
    heredocs: &mut HeredocSet,
    stdin: Option<OwnedFd>,
    stdout: Option<OwnedFd>,
) -> i32 {
    shell.interactive = false;
    let _ = signals::restore_child_defaults();

    if let Some(fd) = &stdin {
        if dup2(fd.as_raw_fd(), 0).is_err() {
            return 1;
        }
    }
    if let Some(fd) = &stdout {
        if dup2(fd.as_raw_fd(), 1).is_err() {
            return 1;
        }
    }
    drop(stdin);
    drop(stdout);

    if let Err(err) = redirect::apply(command, index, heredocs) {
        eprintln!("minishell: {err}");
        return 1;
    }
    // Sibling here-doc fds must not leak through execve.
    heredocs.close_all();

    if command.argv.is_empty() {
        // Redirection-only command: the files were opened, nothing to run.
        return 0;
    }

    let argv = command_argv(command);
    if builtins::find(&argv[0]).is_some() {
        // Builtins inside a multi-command pipeline run isolated in their
        // fork; their side effects die with this process.
        return builtins::run(shell, &argv);
    }

    exec_external(shell, &argv)
}

/// Resolve and exec an external command; returns only on failure.
fn exec_external(shell: &Shell, argv: &[String]) -> i32 {
    let name = &argv[0];
    let program = match path::resolve(name, &shell.env) {
        Resolved::Found(path) => path,
        Resolved::NotFound => {
            if name.contains('/') {
                eprintln!("minishell: {name}: No such file or directory");
            } else {
                eprintln!("minishell: {name}: command not found");
            }
            return 127;
        }
        Resolved::IsDirectory => {
            eprintln!("minishell: {name}: Is a directory");
            return 126;
        }
        Resolved::NotExecutable => {
            eprintln!("minishell: {name}: Permission denied");
            return 126;
        }
    };

    let Ok(program) = CString::new(program.as_os_str().as_bytes()) else {
        eprintln!("minishell: {name}: command not found");
        return 127;
    };
    let args: Vec<CString> = argv
        .iter()
        .filter_map(|arg| CString::new(arg.as_str()).ok())
        .collect();
    if args.len() != argv.len() {
        eprintln!("minishell: {name}: command not found");
        return 127;
    }
    let env = shell.env.snapshot();

    match execve(&program, &args, &env) {
        Ok(never) => match never {},
        Err(err) => {
            eprintln!("minishell: {name}: {}", err.desc());
            126
        }
    }
}
