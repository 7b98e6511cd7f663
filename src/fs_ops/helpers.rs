//! I/O error helpers.
//!
//! Wraps io::Error into `PathError::Os` with the operation, the path and a
//! platform-aware hint. Usage:
//!   fs::create_dir_all(dir).map_err(io_error_with_help("create directory", dir))?;

use std::io;
use std::path::Path;

use crate::errors::PathError;

/// Hint appended to the error message, chosen by raw OS code or error kind.
pub(crate) fn hint_for(e: &io::Error) -> &'static str {
    if let Some(code) = e.raw_os_error() {
        #[cfg(unix)]
        {
            match code {
                libc::EACCES | libc::EPERM => return " (permission denied; check ownership and permissions)",
                libc::EXDEV => return " (cross-filesystem; atomic rename not possible)",
                libc::EBUSY => return " (resource busy; another process is using it)",
                libc::ENOENT => return " (path not found; verify it exists)",
                libc::EEXIST => return " (already exists; pick a unique name or remove the target)",
                libc::ENOTEMPTY => return " (directory not empty)",
                libc::ENOSPC => return " (insufficient space on device)",
                libc::EROFS => return " (read-only filesystem)",
                libc::ENAMETOOLONG => return " (file name or path too long)",
                libc::EMFILE => return " (process file descriptor limit reached)",
                _ => {}
            }
        }
        #[cfg(windows)]
        {
            match code {
                5 => return " (access denied; check permissions)",
                17 => return " (not same device; cross-filesystem move)",
                32 | 33 => return " (sharing violation; file is in use)",
                2 | 3 => return " (path not found; verify it exists)",
                80 | 183 => return " (already exists; pick a unique name)",
                112 => return " (insufficient disk space)",
                206 => return " (file name or path too long)",
                _ => {}
            }
        }
    }
    match e.kind() {
        io::ErrorKind::PermissionDenied => " (permission denied; check ownership and permissions)",
        io::ErrorKind::NotFound => " (path not found; verify it exists)",
        io::ErrorKind::AlreadyExists => " (already exists; pick a unique name or remove the target)",
        _ => "",
    }
}

/// Adapter for `.map_err(...)` converting io::Error into `PathError::Os`.
pub(crate) fn io_error_with_help<'a>(
    op: &'static str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> PathError + 'a {
    move |source: io::Error| PathError::Os {
        op,
        path: path.to_path_buf(),
        hint: hint_for(&source),
        source,
    }
}

/// True when both paths exist and resolve to the same file system object.
#[cfg(unix)]
pub(crate) fn is_same_entry(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;
    match (std::fs::symlink_metadata(a), std::fs::symlink_metadata(b)) {
        (Ok(ma), Ok(mb)) => ma.dev() == mb.dev() && ma.ino() == mb.ino(),
        _ => false,
    }
}

/// True when both paths exist and resolve to the same file system object.
/// Canonicalization reports the on-disk casing, so case variants of one name agree.
#[cfg(not(unix))]
pub(crate) fn is_same_entry(a: &Path, b: &Path) -> bool {
    match (dunce::canonicalize(a), dunce::canonicalize(b)) {
        (Ok(ca), Ok(cb)) => ca == cb,
        _ => false,
    }
}

/// Error for a destination that already holds a different file or directory.
pub(crate) fn refuse_existing(op: &'static str, src: &Path, dest: &Path) -> Result<(), PathError> {
    if std::fs::symlink_metadata(dest).is_ok() && !is_same_entry(src, dest) {
        return Err(io_error_with_help(op, dest)(io::Error::from(io::ErrorKind::AlreadyExists)));
    }
    Ok(())
}

/// True when a rename failed because source and destination are on different devices.
pub(crate) fn is_cross_device(e: &io::Error) -> bool {
    match e.raw_os_error() {
        #[cfg(unix)]
        Some(code) => code == libc::EXDEV,
        // ERROR_NOT_SAME_DEVICE
        #[cfg(windows)]
        Some(code) => code == 17,
        #[cfg(not(any(unix, windows)))]
        Some(_) => false,
        None => false,
    }
}
