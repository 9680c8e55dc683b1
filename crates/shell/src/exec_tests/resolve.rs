// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command resolution against `PATH`.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use tempfile::TempDir;

use super::super::path::{resolve, Resolved};
use super::env_with;
use crate::env::Environment;

fn file_with_mode(dir: &Path, name: &str, mode: u32) {
    let path = dir.join(name);
    fs::write(&path, "#!/bin/sh\n").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
}

fn path_env(dirs: &[&TempDir]) -> Environment {
    let joined: Vec<String> = dirs
        .iter()
        .map(|d| d.path().to_string_lossy().into_owned())
        .collect();
    env_with(&[("PATH", joined.join(":").as_str())])
}

#[test]
fn finds_executable_on_path() {
    let dir = TempDir::new().unwrap();
    file_with_mode(dir.path(), "tool", 0o755);

    let resolved = resolve("tool", &path_env(&[&dir]));
    assert_eq!(resolved, Resolved::Found(dir.path().join("tool")));
}

#[test]
fn first_path_entry_wins() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    file_with_mode(first.path(), "tool", 0o755);
    file_with_mode(second.path(), "tool", 0o755);

    let resolved = resolve("tool", &path_env(&[&first, &second]));
    assert_eq!(resolved, Resolved::Found(first.path().join("tool")));
}

#[test]
fn missing_command_is_not_found() {
    let dir = TempDir::new().unwrap();
    assert_eq!(resolve("nosuchcmd", &path_env(&[&dir])), Resolved::NotFound);
}

#[test]
fn unset_path_resolves_nothing() {
    assert_eq!(resolve("ls", &env_with(&[])), Resolved::NotFound);
}

#[test]
fn non_executable_file_is_blocked() {
    let dir = TempDir::new().unwrap();
    file_with_mode(dir.path(), "tool", 0o644);

    assert_eq!(resolve("tool", &path_env(&[&dir])), Resolved::NotExecutable);
}

#[test]
fn executable_later_in_path_beats_blocked_earlier() {
    let blocked = TempDir::new().unwrap();
    let good = TempDir::new().unwrap();
    file_with_mode(blocked.path(), "tool", 0o644);
    file_with_mode(good.path(), "tool", 0o755);

    let resolved = resolve("tool", &path_env(&[&blocked, &good]));
    assert_eq!(resolved, Resolved::Found(good.path().join("tool")));
}

#[test]
fn slash_bypasses_path_search() {
    let dir = TempDir::new().unwrap();
    file_with_mode(dir.path(), "tool", 0o755);
    let absolute = dir.path().join("tool");

    // PATH is empty; the explicit path must still resolve.
    let resolved = resolve(absolute.to_str().unwrap(), &env_with(&[]));
    assert_eq!(resolved, Resolved::Found(absolute));
}

#[test]
fn explicit_path_missing_is_not_found() {
    let dir = TempDir::new().unwrap();
    let absolute = dir.path().join("gone");
    assert_eq!(resolve(absolute.to_str().unwrap(), &env_with(&[])), Resolved::NotFound);
}

#[test]
fn explicit_path_to_directory() {
    let dir = TempDir::new().unwrap();
    assert_eq!(
        resolve(dir.path().to_str().unwrap(), &env_with(&[])),
        Resolved::IsDirectory
    );
}

#[test]
fn explicit_path_without_exec_bit() {
    let dir = TempDir::new().unwrap();
    file_with_mode(dir.path(), "data", 0o644);
    let absolute = dir.path().join("data");
    assert_eq!(
        resolve(absolute.to_str().unwrap(), &env_with(&[])),
        Resolved::NotExecutable
    );
}

#[test]
fn empty_name_is_not_found() {
    assert_eq!(resolve("", &env_with(&[("PATH", "/bin")])), Resolved::NotFound);
}
