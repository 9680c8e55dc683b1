// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Here-documents end to end.

use crate::prelude::*;

#[test]
fn unquoted_delimiter_expands_the_body() {
    sh("export USER=root\ncat << END\nhi $USER\nEND\n")
        .run()
        .passes()
        .stdout_is("hi root\n");
}

#[test]
fn quoted_delimiter_keeps_the_body_verbatim() {
    sh("export USER=root\ncat << 'END'\nhi $USER\nEND\n")
        .run()
        .passes()
        .stdout_is("hi $USER\n");
}

#[test]
fn body_sees_the_previous_exit_status() {
    sh("nosuchcmd-zz\ncat << E\ncode $?\nE\n")
        .run()
        .passes()
        .stdout_is("code 127\n");
}

#[test]
fn delimiter_must_match_exactly() {
    sh("cat << END\nEND \nEND\n").run().passes().stdout_is("END \n");
}

#[test]
fn heredoc_feeds_a_pipeline() {
    sh("cat << A | wc -l\nx\ny\nA\n").run().passes().stdout_has("2");
}

#[test]
fn heredoc_on_a_parent_builtin_is_wired_and_restored() {
    // echo ignores its stdin; the shell must still collect the body and
    // keep reading script lines afterwards.
    sh("echo hi << END\nbody\nEND\necho after\n")
        .run()
        .passes()
        .stdout_is("hi\nafter\n");
}

#[test]
fn end_of_file_closes_the_body_with_a_warning() {
    sh("cat << END\nhi\n")
        .run()
        .passes()
        .stdout_is("hi\n")
        .stderr_has("delimited by end-of-file");
}

#[test]
fn later_stdin_redirection_overrides_the_heredoc() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("real"), "file wins\n").unwrap();
    sh("cat << END < real\nbody\nEND\n")
        .cwd(dir.path())
        .run()
        .passes()
        .stdout_is("file wins\n");
}
