// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Line input read directly from the standard input descriptor.
//!
//! These reads bypass `std::io::stdin()`'s global buffer for two reasons:
//! a buffered reader would read ahead of the line it returns, stealing the
//! body lines a here-document collector expects to read next; and
//! `BufRead::read_line` transparently retries `EINTR`, which would swallow
//! the Ctrl-C that is supposed to abandon a here-document.

use std::fs::File;
use std::io::{self, Read};
use std::mem::ManuallyDrop;
use std::os::fd::FromRawFd;

/// Reads stdin one byte at a time, never past the returned line.
pub struct LineReader {
    /// fd 0 is borrowed, never closed.
    file: ManuallyDrop<File>,
}

impl LineReader {
    pub fn new() -> Self {
        // SAFETY: fd 0 outlives the shell and ManuallyDrop keeps it open.
        Self { file: ManuallyDrop::new(unsafe { File::from_raw_fd(0) }) }
    }

    /// Read one line without its newline. `None` at end of input.
    ///
    /// `EINTR` is surfaced as `ErrorKind::Interrupted`; the caller decides
    /// whether to retry or abandon.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut bytes = Vec::new();
        let mut buf = [0u8; 1];
        loop {
            match self.file.read(&mut buf) {
                Ok(0) => {
                    if bytes.is_empty() {
                        return Ok(None);
                    }
                    break;
                }
                Ok(_) => {
                    if buf[0] == b'\n' {
                        break;
                    }
                    bytes.push(buf[0]);
                }
                Err(err) => return Err(err),
            }
        }
        Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
    }
}

impl Default for LineReader {
    fn default() -> Self {
        Self::new()
    }
}
