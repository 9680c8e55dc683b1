// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for builtin semantics that do not depend on process stdio;
//! printed output is covered by the end-to-end specs.

mod echo;
mod environment;
mod exit;

use crate::env::Environment;
use crate::exec::Shell;

/// A non-interactive shell with an empty environment.
pub(crate) fn shell() -> Shell {
    Shell::with_env(Environment::new(), false)
}

pub(crate) fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
