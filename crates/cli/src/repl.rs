// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The read–eval loop.
//!
//! On a terminal, lines come from rustyline (which handles Ctrl-C as
//! `Interrupted` and Ctrl-D as `Eof`); each iteration re-enters the
//! prompt-phase signal regime before reading. On anything else, lines are
//! read plainly with no prompts and no `exit` trailer.

use std::io::IsTerminal;

use anyhow::Context;
use minishell_core::input::LineReader;
use minishell_core::{signals, Shell};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

const PROMPT: &str = "minishell$ ";

/// Run the shell until `exit` or end of input; returns the final `$?`.
pub fn run() -> anyhow::Result<i32> {
    let interactive = std::io::stdin().is_terminal();
    let mut shell = Shell::new(interactive);

    if interactive {
        run_interactive(&mut shell)?;
    } else {
        run_batch(&mut shell)?;
    }

    Ok(shell.last_status())
}

fn run_interactive(shell: &mut Shell) -> anyhow::Result<()> {
    let mut editor = DefaultEditor::new().context("cannot initialize line editing")?;

    loop {
        signals::enter_prompt_phase().context("cannot install signal handlers")?;
        signals::take();

        match editor.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line.as_str());
                tracing::debug!(line = %line, "read line");
                shell.run_line(&line);
                if shell.exit_request().is_some() {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                // ^C at the prompt: the typed line is discarded.
                shell.set_last_status(130);
            }
            Err(ReadlineError::Eof) => {
                // ^D on an empty prompt is an exit request.
                eprintln!("exit");
                break;
            }
            Err(err) => return Err(err).context("readline failed"),
        }
    }
    Ok(())
}

/// Non-terminal stdin: the reader must not run ahead of the executor, which
/// may itself consume following lines (here-document bodies).
fn run_batch(shell: &mut Shell) -> anyhow::Result<()> {
    let mut reader = LineReader::new();
    loop {
        match reader.read_line() {
            Ok(None) => break,
            Ok(Some(line)) => {
                shell.run_line(&line);
                if shell.exit_request().is_some() {
                    break;
                }
            }
            Err(err) if err.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err).context("cannot read stdin"),
        }
    }
    Ok(())
}
