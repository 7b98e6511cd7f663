//! Platform-specific helpers.
//! Hides how each OS expresses share modes behind one open function so the
//! retry loop can stay platform-agnostic.

use std::io;

#[cfg(unix)]
mod unix;
#[cfg(not(unix))]
mod windows;

#[cfg(unix)]
pub(crate) use unix::open_with_share;
#[cfg(unix)]
pub use unix::open_log_file_secure_append;

#[cfg(not(unix))]
pub(crate) use windows::open_with_share;
#[cfg(not(unix))]
pub use windows::open_log_file_secure_append;

/// Why a single open attempt failed.
#[derive(Debug)]
pub(crate) enum OpenFailure {
    /// Another handle holds the file in a conflicting mode. Retryable.
    SharingViolation,
    /// Anything else. Never retried.
    Os(io::Error),
}
