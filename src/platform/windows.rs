//! Windows implementations of platform helpers.
//!
//! The share mode is handed to the OS; a conflicting open fails with
//! ERROR_SHARING_VIOLATION or ERROR_LOCK_VIOLATION, both retryable.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::os::windows::fs::OpenOptionsExt;
use std::path::Path;

use windows_sys::Win32::Foundation::{ERROR_LOCK_VIOLATION, ERROR_SHARING_VIOLATION};
use windows_sys::Win32::Storage::FileSystem::{FILE_SHARE_DELETE, FILE_SHARE_READ, FILE_SHARE_WRITE};

use super::OpenFailure;
use crate::access::{CreationDisposition, FileShare, OpenRequest};

fn share_bits(share: FileShare) -> u32 {
    let mut bits = 0;
    if share.read {
        bits |= FILE_SHARE_READ;
    }
    if share.write {
        bits |= FILE_SHARE_WRITE;
    }
    if share.delete {
        bits |= FILE_SHARE_DELETE;
    }
    bits
}

pub(crate) fn open_with_share(path: &Path, request: &OpenRequest) -> Result<File, OpenFailure> {
    request.check().map_err(OpenFailure::Os)?;

    let mut opts = OpenOptions::new();
    opts.read(request.access.reads())
        .write(request.access.writes())
        .share_mode(share_bits(request.share));
    match request.disposition {
        CreationDisposition::CreateNew => {
            opts.create_new(true);
        }
        CreationDisposition::CreateAlways => {
            opts.create(true).truncate(true);
        }
        CreationDisposition::OpenExisting => {}
        CreationDisposition::OpenAlways => {
            opts.create(true);
        }
        CreationDisposition::TruncateExisting => {
            opts.truncate(true);
        }
    }
    opts.open(path).map_err(|e| match e.raw_os_error() {
        Some(code) if code as u32 == ERROR_SHARING_VIOLATION || code as u32 == ERROR_LOCK_VIOLATION => {
            OpenFailure::SharingViolation
        }
        _ => OpenFailure::Os(e),
    })
}

/// Open log file for appending (no ACL changes).
pub fn open_log_file_secure_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    OpenOptions::new().create(true).append(true).open(path)
}
