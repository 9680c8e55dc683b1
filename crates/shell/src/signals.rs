// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Signal dispositions for the two phases of the shell.
//!
//! While the shell waits for input, SIGINT runs a recording handler and
//! SIGQUIT is ignored. While a foreground pipeline runs, the parent ignores
//! both so it is not killed alongside its children; the children restore the
//! default dispositions right after fork.
//!
//! The recording handler stores the signal number in a single process-wide
//! atomic — the only mutable process-wide state in the shell. Handlers are
//! installed without `SA_RESTART` so that a blocking here-document read
//! returns `EINTR` instead of resuming, letting the collector abandon the
//! line.

use std::sync::atomic::{AtomicI32, Ordering};

use nix::libc;
use nix::sys::signal::{sigaction, SaFlags, SigAction, SigHandler, SigSet, Signal};

/// Latest signal number observed by the input-phase handler; 0 when none.
static LAST_SIGNAL: AtomicI32 = AtomicI32::new(0);

extern "C" fn record(signum: libc::c_int) {
    LAST_SIGNAL.store(signum, Ordering::SeqCst);
}

fn action(handler: SigHandler) -> SigAction {
    SigAction::new(handler, SaFlags::empty(), SigSet::empty())
}

/// Disposition while awaiting input (prompt or here-document lines).
pub fn enter_prompt_phase() -> nix::Result<()> {
    unsafe {
        sigaction(Signal::SIGINT, &action(SigHandler::Handler(record)))?;
        sigaction(Signal::SIGQUIT, &action(SigHandler::SigIgn))?;
    }
    Ok(())
}

/// Disposition while a foreground pipeline runs: the kernel delivers
/// signals to the children; the parent only observes wait results.
pub fn enter_wait_phase() -> nix::Result<()> {
    unsafe {
        sigaction(Signal::SIGINT, &action(SigHandler::SigIgn))?;
        sigaction(Signal::SIGQUIT, &action(SigHandler::SigIgn))?;
    }
    Ok(())
}

/// Restore default dispositions in a freshly forked child.
pub fn restore_child_defaults() -> nix::Result<()> {
    unsafe {
        sigaction(Signal::SIGINT, &action(SigHandler::SigDfl))?;
        sigaction(Signal::SIGQUIT, &action(SigHandler::SigDfl))?;
    }
    Ok(())
}

/// Consume the latest recorded signal number, if any.
pub fn take() -> Option<i32> {
    match LAST_SIGNAL.swap(0, Ordering::SeqCst) {
        0 => None,
        n => Some(n),
    }
}

/// True if a signal has been recorded and not yet consumed.
pub fn pending() -> bool {
    LAST_SIGNAL.load(Ordering::SeqCst) != 0
}

#[cfg(test)]
#[path = "signals_tests.rs"]
mod tests;
