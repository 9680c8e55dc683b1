// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Builtin behavior observable from outside the process.

use crate::prelude::*;

#[test]
fn echo_n_suppresses_the_newline() {
    sh("echo -n hi\n").run().passes().stdout_is("hi");
}

#[test]
fn pwd_prints_the_working_directory() {
    let dir = tempfile::TempDir::new().unwrap();
    let canonical = dir.path().canonicalize().unwrap();
    sh("pwd\n")
        .cwd(&canonical)
        .run()
        .passes()
        .stdout_is(&format!("{}\n", canonical.display()));
}

#[test]
fn cd_changes_directory_and_updates_pwd() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("sub")).unwrap();

    let ran = sh("cd sub\npwd\necho \"$PWD\"\n").cwd(dir.path()).run().passes();
    let stdout = ran.stdout();
    let mut lines = stdout.lines();
    let pwd_line = lines.next().unwrap();
    let var_line = lines.next().unwrap();
    assert!(pwd_line.ends_with("/sub"), "pwd printed {pwd_line:?}");
    assert_eq!(pwd_line, var_line);
}

#[test]
fn cd_records_oldpwd() {
    let dir = tempfile::TempDir::new().unwrap();
    let canonical = dir.path().canonicalize().unwrap();
    std::fs::create_dir(canonical.join("sub")).unwrap();

    sh("cd sub\necho \"$OLDPWD\"\n")
        .cwd(&canonical)
        .run()
        .passes()
        .stdout_is(&format!("{}\n", canonical.display()));
}

#[test]
fn cd_without_arguments_stays_put() {
    let dir = tempfile::TempDir::new().unwrap();
    let canonical = dir.path().canonicalize().unwrap();
    sh("cd\npwd\n")
        .cwd(&canonical)
        .run()
        .passes()
        .stdout_is(&format!("{}\n", canonical.display()));
}

#[test]
fn cd_with_too_many_arguments() {
    sh("cd /tmp /var\necho $?\n")
        .run()
        .stdout_is("1\n")
        .stderr_has("cd: too many arguments");
}

#[test]
fn cd_to_missing_directory_reports_errno() {
    sh("cd /no-such-minishell-dir\necho $?\n")
        .run()
        .stdout_is("1\n")
        .stderr_has("No such file or directory");
}

#[test]
fn export_listing_uses_declare_form() {
    sh("export ZZ_SPEC=value\nexport\n")
        .run()
        .passes()
        .stdout_has("declare -x ZZ_SPEC=\"value\"");
}

#[test]
fn export_invalid_identifier() {
    sh("export 2bad=1\necho $?\n")
        .run()
        .stdout_is("1\n")
        .stderr_has("not a valid identifier");
}

#[test]
fn env_prints_valued_entries_only() {
    sh("export QQ_SPEC=1\nexport QQ_BARE\nenv\n")
        .run()
        .passes()
        .stdout_has("QQ_SPEC=1");

    let ran = sh("export QQ_BARE\nenv\n").run().passes();
    assert!(!ran.stdout().contains("QQ_BARE"));
}

#[test]
fn env_preserves_insertion_order() {
    let ran = sh("export AA_FIRST=1\nexport AA_SECOND=2\nenv\n").run().passes();
    let stdout = ran.stdout();
    let first = stdout.find("AA_FIRST=1").expect("AA_FIRST in env output");
    let second = stdout.find("AA_SECOND=2").expect("AA_SECOND in env output");
    assert!(first < second);
}

#[test]
fn env_with_arguments_fails_127() {
    sh("env ls\necho $?\n").run().stdout_is("127\n");
}

#[test]
fn unset_removes_from_env_output() {
    let ran = sh("export GONE_SPEC=1\nunset GONE_SPEC\nenv\n").run().passes();
    assert!(!ran.stdout().contains("GONE_SPEC"));
}

#[test]
fn exit_sets_the_process_status() {
    sh("exit 42\n").run().status_is(42);
}

#[test]
fn exit_wraps_modulo_256() {
    sh("exit 300\n").run().status_is(44);
}

#[test]
fn exit_non_numeric() {
    sh("exit abc\n").run().status_is(2).stderr_has("numeric argument required");
}

#[test]
fn exit_with_too_many_arguments_stays() {
    sh("exit 1 2\necho alive\n")
        .run()
        .passes()
        .stdout_is("alive\n")
        .stderr_has("too many arguments");
}

#[test]
fn exit_without_arguments_uses_last_status() {
    sh("nosuchcmd-zz\nexit\n").run().status_is(127);
}
