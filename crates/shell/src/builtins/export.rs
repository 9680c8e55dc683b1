// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `export [NAME | NAME=VALUE | NAME+=VALUE]...`
//!
//! With no arguments, prints every entry sorted by name in `declare -x`
//! form. Invalid identifiers are diagnosed but do not stop the remaining
//! arguments from being processed.

use std::io::Write;

use crate::env::{is_valid_name, Environment};
use crate::exec::Shell;

pub(crate) fn run(shell: &mut Shell, args: &[String]) -> i32 {
    if args.is_empty() {
        let mut out = std::io::stdout();
        for line in listing(shell.env()) {
            let _ = writeln!(out, "{line}");
        }
        let _ = out.flush();
        return 0;
    }

    let mut status = 0;
    for arg in args {
        if !assign(shell.env_mut(), arg) {
            eprintln!("minishell: export: `{arg}': not a valid identifier");
            status = 1;
        }
    }
    status
}

/// `declare -x` lines sorted by name; valueless entries print bare.
pub(crate) fn listing(env: &Environment) -> Vec<String> {
    let mut entries: Vec<(&str, Option<&str>)> = env.iter().collect();
    entries.sort_by_key(|(name, _)| *name);
    entries
        .into_iter()
        .map(|(name, value)| match value {
            Some(value) => format!("declare -x {name}=\"{value}\""),
            None => format!("declare -x {name}"),
        })
        .collect()
}

/// Apply one argument. Returns false for an invalid identifier.
fn assign(env: &mut Environment, arg: &str) -> bool {
    match arg.split_once('=') {
        None => {
            if !is_valid_name(arg) {
                return false;
            }
            env.set_unvalued(arg);
            true
        }
        Some((name, value)) => {
            if let Some(base) = name.strip_suffix('+') {
                if !is_valid_name(base) {
                    return false;
                }
                env.append(base, value);
            } else {
                if !is_valid_name(name) {
                    return false;
                }
                env.set(name, value);
            }
            true
        }
    }
}
