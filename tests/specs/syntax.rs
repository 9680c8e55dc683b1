// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Syntax errors and command resolution failures.

use crate::prelude::*;

#[test]
fn trailing_pipe_is_a_syntax_error() {
    sh("echo |\n")
        .run()
        .status_is(2)
        .stderr_has("syntax error near unexpected token 'newline'");
}

#[test]
fn leading_pipe_is_a_syntax_error() {
    sh("| ls\n")
        .run()
        .status_is(2)
        .stderr_has("syntax error near unexpected token '|'");
}

#[test]
fn doubled_pipe_is_a_syntax_error() {
    sh("a || b\n").run().status_is(2).stderr_has("unexpected token '|'");
}

#[test]
fn redirection_without_target_is_a_syntax_error() {
    sh("echo >\n").run().status_is(2).stderr_has("syntax error");
}

#[test]
fn unterminated_quote_is_a_syntax_error() {
    sh("echo 'oops\n")
        .run()
        .status_is(2)
        .stderr_has("unterminated single quote");
}

#[test]
fn syntax_errors_do_not_end_the_session() {
    sh("echo |\necho $?\n").run().passes().stdout_is("2\n");
}

#[test]
fn unknown_command_is_127() {
    sh("nosuchcmd-spec\necho $?\n")
        .run()
        .passes()
        .stdout_is("127\n")
        .stderr_has("nosuchcmd-spec: command not found");
}

#[test]
fn missing_path_program_is_127() {
    let dir = tempfile::TempDir::new().unwrap();
    let missing = dir.path().join("gone");
    sh(&format!("{}\n", missing.display()))
        .run()
        .status_is(127)
        .stderr_has("No such file or directory");
}

#[test]
fn non_executable_file_is_126() {
    let dir = tempfile::TempDir::new().unwrap();
    let file = dir.path().join("data");
    std::fs::write(&file, "not a program\n").unwrap();
    sh(&format!("{}\n", file.display()))
        .run()
        .status_is(126)
        .stderr_has("Permission denied");
}

#[test]
fn directory_as_command_is_126() {
    let dir = tempfile::TempDir::new().unwrap();
    sh(&format!("{}\n", dir.path().display()))
        .run()
        .status_is(126)
        .stderr_has("Is a directory");
}

#[test]
fn empty_path_hides_everything() {
    sh("ls\necho $?\n")
        .env("PATH", "")
        .run()
        .passes()
        .stdout_is("127\n")
        .stderr_has("ls: command not found");
}

#[test]
fn blank_lines_keep_the_previous_status() {
    sh("nosuchcmd-spec\n\n   \necho $?\n").run().passes().stdout_is("127\n");
}
