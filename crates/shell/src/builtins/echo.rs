// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `echo [-n] args...`

use std::io::Write;

use crate::exec::Shell;

pub(crate) fn run(_shell: &mut Shell, args: &[String]) -> i32 {
    let (newline, rest) = parse_flags(args);
    let mut out = std::io::stdout();
    let _ = out.write_all(render(rest, newline).as_bytes());
    let _ = out.flush();
    0
}

/// Consume leading `-n` flags. `-nnn…` also counts; anything else is an
/// ordinary argument, including `-x` or `--`.
pub(crate) fn parse_flags(args: &[String]) -> (bool, &[String]) {
    let mut newline = true;
    let mut rest = args;
    while let Some((first, tail)) = rest.split_first() {
        if !is_n_flag(first) {
            break;
        }
        newline = false;
        rest = tail;
    }
    (newline, rest)
}

fn is_n_flag(arg: &str) -> bool {
    arg.len() >= 2 && arg.starts_with('-') && arg[1..].bytes().all(|b| b == b'n')
}

/// Arguments joined by single spaces, with an optional trailing newline.
pub(crate) fn render(args: &[String], newline: bool) -> String {
    let mut text = args.join(" ");
    if newline {
        text.push('\n');
    }
    text
}
