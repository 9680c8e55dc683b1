// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! File redirections end to end.

use crate::prelude::*;

#[test]
fn output_redirection_writes_the_file() {
    let dir = tempfile::TempDir::new().unwrap();
    sh("echo done > out.txt\n").cwd(dir.path()).run().passes();
    assert_eq!(std::fs::read_to_string(dir.path().join("out.txt")).unwrap(), "done\n");
}

/// The redirection may precede the command words.
#[test]
fn redirection_before_the_command() {
    let dir = tempfile::TempDir::new().unwrap();
    sh("> out.txt echo done\n").cwd(dir.path()).run().passes();
    assert_eq!(std::fs::read_to_string(dir.path().join("out.txt")).unwrap(), "done\n");
}

#[test]
fn append_redirection_accumulates() {
    let dir = tempfile::TempDir::new().unwrap();
    sh("echo a > f\necho b >> f\n").cwd(dir.path()).run().passes();
    assert_eq!(std::fs::read_to_string(dir.path().join("f")).unwrap(), "a\nb\n");
}

#[test]
fn truncating_redirection_overwrites() {
    let dir = tempfile::TempDir::new().unwrap();
    sh("echo long-first-line > f\necho x > f\n").cwd(dir.path()).run().passes();
    assert_eq!(std::fs::read_to_string(dir.path().join("f")).unwrap(), "x\n");
}

#[test]
fn input_redirection_feeds_stdin() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("in.txt"), "from the file\n").unwrap();
    sh("cat < in.txt\n")
        .cwd(dir.path())
        .run()
        .passes()
        .stdout_is("from the file\n");
}

/// Later redirections override earlier ones; every file is still opened.
#[test]
fn last_output_redirection_wins() {
    let dir = tempfile::TempDir::new().unwrap();
    sh("echo x > a > b\n").cwd(dir.path()).run().passes();
    assert_eq!(std::fs::read_to_string(dir.path().join("a")).unwrap(), "");
    assert_eq!(std::fs::read_to_string(dir.path().join("b")).unwrap(), "x\n");
}

#[test]
fn redirection_only_command_touches_and_succeeds() {
    let dir = tempfile::TempDir::new().unwrap();
    sh("> created\necho $?\n").cwd(dir.path()).run().passes().stdout_is("0\n");
    assert!(dir.path().join("created").exists());
}

#[test]
fn missing_input_file_fails_that_command_only() {
    sh("cat < definitely-not-here\necho $?\n")
        .run()
        .stdout_is("1\n")
        .stderr_has("definitely-not-here")
        .stderr_has("No such file or directory");
}

#[test]
fn failed_redirection_does_not_kill_the_pipeline() {
    sh("cat < definitely-not-here | echo ok\n")
        .run()
        .passes()
        .stdout_is("ok\n");
}

#[test]
fn expanded_redirection_target() {
    let dir = tempfile::TempDir::new().unwrap();
    sh("export NAME=var-target\necho hi > $NAME\n").cwd(dir.path()).run().passes();
    assert_eq!(std::fs::read_to_string(dir.path().join("var-target")).unwrap(), "hi\n");
}

#[test]
fn per_command_redirections_in_a_pipeline() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("in"), "one two three\n").unwrap();
    sh("cat < in | wc -w > out\n").cwd(dir.path()).run().passes();
    let out = std::fs::read_to_string(dir.path().join("out")).unwrap();
    assert_eq!(out.trim(), "3");
}
