//! Unix implementations of platform helpers.
//!
//! Unix opens carry no share mode, so it is emulated with advisory `flock`
//! locks taken right after the open: a request that writes, or that refuses
//! read sharing, needs `LOCK_EX`; a plain shared read takes `LOCK_SH`. Both
//! are non-blocking and a contended lock reports a sharing violation. Only
//! openers that go through this function observe the emulation.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::os::fd::AsRawFd;
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
use std::path::Path;

use super::OpenFailure;
use crate::access::{CreationDisposition, OpenRequest};

pub(crate) fn open_with_share(path: &Path, request: &OpenRequest) -> Result<File, OpenFailure> {
    request.check().map_err(OpenFailure::Os)?;

    let mut opts = OpenOptions::new();
    opts.read(request.access.reads())
        .write(request.access.writes())
        .custom_flags(libc::O_CLOEXEC);
    match request.disposition {
        CreationDisposition::CreateNew => {
            opts.create_new(true);
        }
        CreationDisposition::CreateAlways | CreationDisposition::OpenAlways => {
            opts.create(true);
        }
        CreationDisposition::OpenExisting | CreationDisposition::TruncateExisting => {}
    }
    let file = opts.open(path).map_err(OpenFailure::Os)?;

    let exclusive = request.access.writes() || !request.share.read;
    let op = if exclusive { libc::LOCK_EX } else { libc::LOCK_SH };
    let rc = unsafe { libc::flock(file.as_raw_fd(), op | libc::LOCK_NB) };
    if rc != 0 {
        let err = io::Error::last_os_error();
        // `file` is dropped on return, closing the descriptor.
        return Err(if err.raw_os_error() == Some(libc::EWOULDBLOCK) {
            OpenFailure::SharingViolation
        } else {
            OpenFailure::Os(err)
        });
    }

    // Truncate only once the lock is ours so a holder never sees its data vanish.
    if request.disposition.truncates() {
        file.set_len(0).map_err(OpenFailure::Os)?;
    }
    Ok(file)
}

/// Open log file for appending; set 0600 only when creating a new file.
/// Existing files keep their permissions.
pub fn open_log_file_secure_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let existed = path.exists();
    let f = OpenOptions::new()
        .create(true)
        .append(true)
        .mode(0o600)
        .open(path)?;
    if !existed {
        let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o600));
    }
    Ok(f)
}
