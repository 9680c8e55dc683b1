// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fluent harness for piping a script into the minishell binary.

use std::path::Path;
use std::process::Output;

use assert_cmd::Command;

/// Start a script that will be piped into minishell's stdin.
pub(crate) fn sh(script: &str) -> Script {
    let mut cmd = Command::cargo_bin("minishell").expect("minishell binary should be built");
    cmd.write_stdin(script.to_string());
    Script { cmd }
}

pub(crate) struct Script {
    cmd: Command,
}

impl Script {
    /// Override an environment variable for the run.
    pub(crate) fn env(mut self, name: &str, value: &str) -> Self {
        self.cmd.env(name, value);
        self
    }

    /// Run from the given directory.
    pub(crate) fn cwd(mut self, dir: &Path) -> Self {
        self.cmd.current_dir(dir);
        self
    }

    /// Run to completion and wrap the output for assertions.
    pub(crate) fn run(mut self) -> Ran {
        let output = self.cmd.output().expect("minishell should spawn");
        Ran { output }
    }
}

pub(crate) struct Ran {
    output: Output,
}

impl Ran {
    pub(crate) fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub(crate) fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    fn code(&self) -> i32 {
        self.output.status.code().unwrap_or(-1)
    }

    pub(crate) fn stdout_is(self, expected: &str) -> Self {
        assert_eq!(self.stdout(), expected, "stderr was: {:?}", self.stderr());
        self
    }

    pub(crate) fn stdout_has(self, needle: &str) -> Self {
        assert!(
            self.stdout().contains(needle),
            "stdout {:?} does not contain {needle:?}",
            self.stdout()
        );
        self
    }

    pub(crate) fn stderr_has(self, needle: &str) -> Self {
        assert!(
            self.stderr().contains(needle),
            "stderr {:?} does not contain {needle:?}",
            self.stderr()
        );
        self
    }

    /// The binary's exit code equals the shell's final `$?`.
    pub(crate) fn status_is(self, expected: i32) -> Self {
        assert_eq!(
            self.code(),
            expected,
            "stdout: {:?}, stderr: {:?}",
            self.stdout(),
            self.stderr()
        );
        self
    }

    pub(crate) fn passes(self) -> Self {
        self.status_is(0)
    }
}
