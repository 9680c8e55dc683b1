// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pwd`

use std::io::Write;

use crate::exec::error::errno_message;
use crate::exec::Shell;

pub(crate) fn run(_shell: &mut Shell, _args: &[String]) -> i32 {
    match std::env::current_dir() {
        Ok(dir) => {
            let mut out = std::io::stdout();
            let _ = writeln!(out, "{}", dir.display());
            let _ = out.flush();
            0
        }
        Err(err) => {
            eprintln!("minishell: pwd: {}", errno_message(&err));
            1
        }
    }
}
