//! Process-wide cancellation flag.
//! Raised by the Ctrl-C handler in `pw-io`; the blocking retry loop checks it
//! between attempts and stops with `AccessOutcome::Cancelled`.
//!
//! Relaxed ordering is enough for a one-way flag. `request()` is safe to call
//! from a signal handler.

use std::sync::atomic::{AtomicBool, Ordering};

static SHUTDOWN: AtomicBool = AtomicBool::new(false);

/// Raise the flag (idempotent).
#[inline]
pub fn request() {
    SHUTDOWN.store(true, Ordering::Relaxed);
}

#[inline]
pub fn is_requested() -> bool {
    SHUTDOWN.load(Ordering::Relaxed)
}

/// Lower the flag again, e.g. between independent runs in one process.
#[inline]
pub fn reset() {
    SHUTDOWN.store(false, Ordering::Relaxed);
}
