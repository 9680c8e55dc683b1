// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `env`
//!
//! Prints valued entries in insertion order. Arguments (running a command
//! in a modified environment) are not supported.

use std::io::Write;

use crate::exec::Shell;

pub(crate) fn run(shell: &mut Shell, args: &[String]) -> i32 {
    if !args.is_empty() {
        eprintln!("minishell: env: too many arguments");
        return 127;
    }

    let mut out = std::io::stdout();
    for (name, value) in shell.env().iter() {
        if let Some(value) = value {
            let _ = writeln!(out, "{name}={value}");
        }
    }
    let _ = out.flush();
    0
}
