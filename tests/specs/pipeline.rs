// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Word handling, expansion, and pipeline wiring end to end.

use crate::prelude::*;

/// Extra whitespace between arguments collapses to single spaces.
#[test]
fn echo_joins_arguments() {
    sh("echo hello   world\n").run().passes().stdout_is("hello world\n");
}

/// Double quotes keep inner single quotes literal; single quotes suppress
/// expansion.
#[test]
fn quote_semantics() {
    sh("echo \"a'b'c\" '$HOME'\n")
        .run()
        .passes()
        .stdout_is("a'b'c $HOME\n");
}

/// An exported variable and `$?` expand inside double quotes.
#[test]
fn exported_variable_and_status_expand() {
    sh("export X=42\necho \"$X$?\"\n").run().passes().stdout_is("420\n");
}

#[test]
fn undefined_variable_collapses_away() {
    sh("echo $UNDEFINED_VARIABLE foo\n").run().passes().stdout_is("foo\n");
}

#[test]
fn quoted_empty_expansion_is_kept() {
    // The empty quoted argument survives: wc receives "" and fails to open
    // it, so the trailing `echo $?` prints wc's failure.
    sh("wc \"$UNDEFINED_VARIABLE\" < /dev/null\necho $?\n")
        .run()
        .stdout_is("1\n");

    // Its unquoted twin is dropped and wc happily reads the redirection.
    sh("wc $UNDEFINED_VARIABLE < /dev/null\n").run().passes();
}

#[test]
fn three_stage_pipeline_counts_directory_entries() {
    let dir = tempfile::TempDir::new().unwrap();
    for name in ["a", "b", "c"] {
        std::fs::write(dir.path().join(name), "").unwrap();
    }

    let ran = sh("ls | grep . | wc -l\n").cwd(dir.path()).run().passes();
    assert_eq!(ran.stdout().trim(), "3");
}

#[test]
fn pipeline_status_is_the_rightmost_commands() {
    sh("nosuchcmd-zz | echo ok\n")
        .run()
        .passes()
        .stdout_is("ok\n")
        .stderr_has("command not found");
}

#[test]
fn failing_rightmost_command_sets_status() {
    sh("echo hi | grep zzz\necho $?\n").run().stdout_is("1\n");
}

/// The binary's own exit code is the last line's status.
#[test]
fn final_status_becomes_the_exit_code() {
    sh("false\n").run().status_is(1);
}

#[test]
fn builtin_in_a_pipeline_runs_isolated() {
    // export in a fork must not leak into the parent shell.
    sh("export LEAK=1 | cat\necho $LEAK.\n").run().passes().stdout_is(".\n");
}

#[test]
fn echo_builtin_feeds_the_pipe() {
    sh("echo one two | wc -w\n").run().passes().stdout_has("2");
}

#[test]
fn idempotent_non_mutating_pipeline() {
    let first = sh("echo stable | cat\n").run().passes();
    let second = sh("echo stable | cat\n").run().passes();
    assert_eq!(first.stdout(), second.stdout());
}
