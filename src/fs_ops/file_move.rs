//! File move and rename.
//! Tries a plain rename; when the OS reports a cross-device move, copies into a
//! temporary sibling of the destination, renames it into place and removes the source.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{info, warn};

use super::helpers::{io_error_with_help, is_cross_device, refuse_existing};
use crate::errors::{PathError, Result};
use crate::paths::{DirectoryPath, FileName, FilePath};

static TEMP_SEQ: AtomicU64 = AtomicU64::new(0);

/// Hidden sibling name: `.pw_io.<pid>.<nanos>.<seq>.tmp`.
fn unique_temp_path(dest_dir: &Path) -> PathBuf {
    let pid = std::process::id();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let seq = TEMP_SEQ.fetch_add(1, Ordering::Relaxed);
    dest_dir.join(format!(".pw_io.{pid}.{nanos}.{seq}.tmp"))
}

fn copy_then_remove(src: &Path, dest: &Path) -> Result<()> {
    let dest_dir = dest.parent().unwrap_or_else(|| Path::new("."));
    let tmp = unique_temp_path(dest_dir);
    fs::copy(src, &tmp).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        io_error_with_help("copy to temporary file", &tmp)(e)
    })?;
    if let Err(e) = fs::rename(&tmp, dest) {
        let _ = fs::remove_file(&tmp);
        return Err(io_error_with_help("rename temporary file", dest)(e));
    }
    fs::remove_file(src).map_err(io_error_with_help("remove original file", src))
}

/// Move `src` to `dest`. An existing destination is never overwritten, unless it
/// is the same file as the source (a casing-only rename on a case-insensitive volume).
fn relocate(src: &FilePath, dest: &FilePath) -> Result<()> {
    refuse_existing("move file", src.as_path(), dest.as_path())?;
    match fs::rename(src.as_path(), dest.as_path()) {
        Ok(()) => {
            info!(src = %src, dest = %dest, "moved file");
            Ok(())
        }
        Err(e) if is_cross_device(&e) => {
            warn!(src = %src, dest = %dest, error = %e, "rename crossed devices; copying instead");
            copy_then_remove(src.as_path(), dest.as_path())?;
            info!(src = %src, dest = %dest, "copied file and removed source");
            Ok(())
        }
        Err(e) => Err(io_error_with_help("move file", src.as_path())(e)),
    }
}

fn require_file(file: &FilePath) -> Result<()> {
    if file.exists() {
        Ok(())
    } else {
        Err(PathError::FileNotFound(file.to_path_buf()))
    }
}

/// Move `file` into `directory`, keeping its name. The directory is created if absent.
pub fn move_file(file: &FilePath, directory: &DirectoryPath) -> Result<FilePath> {
    require_file(file)?;
    fs::create_dir_all(directory.as_path()).map_err(io_error_with_help("create destination directory", directory.as_path()))?;
    let dest = file.change_directory(directory);
    relocate(file, &dest)?;
    Ok(dest)
}

/// Move `file` to the full path `dest`. The destination directory must exist.
pub fn move_file_to(file: &FilePath, dest: &FilePath) -> Result<FilePath> {
    require_file(file)?;
    relocate(file, dest)?;
    Ok(dest.clone())
}

/// Rename `file` in place.
///
/// A casing-only rename goes through when the file system folds case; where it
/// does not, an existing file with the new casing is a different file and is
/// left alone.
pub fn rename_file(file: &FilePath, new_name: &FileName) -> Result<FilePath> {
    require_file(file)?;
    let dest = file.change_name(new_name);
    relocate(file, &dest)?;
    Ok(dest)
}
