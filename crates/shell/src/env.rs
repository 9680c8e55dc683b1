// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The shell's environment table.
//!
//! An insertion-ordered map from variable name to optional value. A `None`
//! value marks a variable introduced by bare `export NAME`; it is visible to
//! `export` listings but excluded from `env` output and child environments.
//! Uniqueness by name is an invariant: setting an existing name updates it
//! in place, keeping its original position.

use std::ffi::CString;

use indexmap::IndexMap;

/// Ordered mapping from variable name to optional value.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    vars: IndexMap<String, Option<String>>,
}

impl Environment {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the parent process's environment at startup.
    pub fn from_process() -> Self {
        let mut env = Self::new();
        for (name, value) in std::env::vars() {
            env.set(name, value);
        }
        env
    }

    /// Look up a variable's value. Unset and valueless variables both
    /// resolve to `None`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).and_then(|v| v.as_deref())
    }

    /// Set a variable, inserting or updating in place.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), Some(value.into()));
    }

    /// Declare a variable without a value (`export NAME`).
    ///
    /// An existing value is left untouched.
    pub fn set_unvalued(&mut self, name: impl Into<String>) {
        self.vars.entry(name.into()).or_insert(None);
    }

    /// Append to a variable's value (`export NAME+=VALUE`).
    ///
    /// A missing or valueless variable behaves as empty.
    pub fn append(&mut self, name: impl Into<String>, suffix: &str) {
        let slot = self.vars.entry(name.into()).or_insert(None);
        match slot {
            Some(value) => value.push_str(suffix),
            None => *slot = Some(suffix.to_string()),
        }
    }

    /// Remove a variable. Removal preserves the order of the others.
    pub fn unset(&mut self, name: &str) {
        self.vars.shift_remove(name);
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    /// Build the `NAME=VALUE` array handed to `execve`.
    ///
    /// Only valued entries are included. Entries that cannot be represented
    /// as C strings (embedded NUL) are skipped.
    pub fn snapshot(&self) -> Vec<CString> {
        self.vars
            .iter()
            .filter_map(|(name, value)| {
                let value = value.as_deref()?;
                CString::new(format!("{name}={value}")).ok()
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// Variable names start with `[a-zA-Z_]` and contain only `[a-zA-Z0-9_]`.
pub fn is_valid_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
