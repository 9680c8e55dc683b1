// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the executor's process-free pieces: expansion and command
//! resolution. Fork/exec behavior is covered by the end-to-end specs.

mod expansion;
mod resolve;

use crate::env::Environment;

/// An environment with the given variables.
pub(crate) fn env_with(vars: &[(&str, &str)]) -> Environment {
    let mut env = Environment::new();
    for (name, value) in vars {
        env.set(*name, *value);
    }
    env
}
