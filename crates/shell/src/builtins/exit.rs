// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `exit [code]`
//!
//! Leaves the shell with the given status, or with `$?` when no code is
//! given. Too many arguments is an error that does not exit.

use crate::exec::Shell;

pub(crate) fn run(shell: &mut Shell, args: &[String]) -> i32 {
    if shell.is_interactive() {
        eprintln!("exit");
    }

    match args {
        [] => {
            let status = shell.last_status();
            shell.request_exit(status);
            status
        }
        [code] => match parse_code(code) {
            Some(status) => {
                shell.request_exit(status);
                status
            }
            None => {
                eprintln!("minishell: exit: {code}: numeric argument required");
                shell.request_exit(2);
                2
            }
        },
        _ => {
            eprintln!("minishell: exit: too many arguments");
            1
        }
    }
}

/// Signed decimal, reduced modulo 256 like any process exit status.
fn parse_code(arg: &str) -> Option<i32> {
    let value: i64 = arg.parse().ok()?;
    Some(value.rem_euclid(256) as i32)
}
