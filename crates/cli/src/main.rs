// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Interactive entry point for minishell.
//!
//! Takes no arguments (any given are ignored), reads stdin, and exits with
//! the shell's final `$?`.

mod repl;

use tracing_subscriber::EnvFilter;

fn main() {
    // Logging stays dark unless RUST_LOG asks for it; the terminal belongs
    // to the prompt.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let status = match repl::run() {
        Ok(status) => status,
        Err(err) => {
            eprintln!("minishell: {err:#}");
            1
        }
    };
    std::process::exit(status);
}
