// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cd [dir]`
//!
//! Without an argument this is a successful no-op; this shell does not
//! consult `HOME`. On success `PWD` and `OLDPWD` are updated.

use crate::exec::error::errno_message;
use crate::exec::Shell;

pub(crate) fn run(shell: &mut Shell, args: &[String]) -> i32 {
    match args {
        [] => 0,
        [target] => change_dir(shell, target),
        _ => {
            eprintln!("minishell: cd: too many arguments");
            1
        }
    }
}

fn change_dir(shell: &mut Shell, target: &str) -> i32 {
    let previous = std::env::current_dir().ok();

    if let Err(err) = std::env::set_current_dir(target) {
        eprintln!("minishell: cd: {target}: {}", errno_message(&err));
        return 1;
    }

    if let Some(previous) = previous {
        shell.env_mut().set("OLDPWD", previous.to_string_lossy());
    }
    if let Ok(current) = std::env::current_dir() {
        shell.env_mut().set("PWD", current.to_string_lossy());
    }
    0
}
