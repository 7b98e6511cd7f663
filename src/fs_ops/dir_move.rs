//! Directory creation and moves.
//! A move tries a rename first; across devices it copies the tree and removes the source.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use super::helpers::{io_error_with_help, is_cross_device, refuse_existing};
use crate::errors::{PathError, Result};
use crate::paths::{DirectoryName, DirectoryPath};

/// Create `directory` and any missing parents. Succeeds if it already exists.
pub fn create_directory(directory: &DirectoryPath) -> Result<DirectoryPath> {
    fs::create_dir_all(directory.as_path()).map_err(io_error_with_help("create directory", directory.as_path()))?;
    debug!(path = %directory, "directory ensured");
    Ok(directory.clone())
}

/// Create each named subdirectory of `directory` that does not exist yet.
/// Duplicate names (ignoring case) are collapsed; the result keeps first-seen order.
pub fn create_subdirectories<'a, I>(directory: &DirectoryPath, names: I) -> Result<Vec<DirectoryPath>>
where
    I: IntoIterator<Item = &'a DirectoryName>,
{
    let mut seen = HashSet::new();
    let targets: Vec<DirectoryPath> = names
        .into_iter()
        .filter(|n| seen.insert(*n))
        .map(|n| directory.append_dir(n))
        .collect();
    for target in targets.iter().filter(|t| !t.exists()) {
        fs::create_dir_all(target.as_path()).map_err(io_error_with_help("create directory", target.as_path()))?;
    }
    Ok(targets)
}

fn copy_tree(src: &Path, dest: &Path) -> Result<()> {
    for entry in WalkDir::new(src) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(src).to_path_buf();
            io_error_with_help("read directory", &path)(io::Error::from(e))
        })?;
        let rel = entry.path().strip_prefix(src).unwrap_or(entry.path());
        let target = dest.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(io_error_with_help("create directory", &target))?;
        } else {
            fs::copy(entry.path(), &target).map_err(io_error_with_help("copy file to destination", &target))?;
        }
    }
    Ok(())
}

/// Move `directory` to `new_directory` (its new full path, not its new parent).
pub fn move_directory(directory: &DirectoryPath, new_directory: &DirectoryPath) -> Result<DirectoryPath> {
    if !directory.exists() {
        return Err(PathError::DirectoryNotFound(directory.to_path_buf()));
    }
    let src = directory.to_path_buf();
    let dest = new_directory.to_path_buf();
    refuse_existing("move directory", &src, &dest)?;
    match fs::rename(&src, &dest) {
        Ok(()) => {
            info!(src = %directory, dest = %new_directory, "moved directory");
        }
        Err(e) if is_cross_device(&e) => {
            warn!(src = %directory, dest = %new_directory, error = %e, "rename crossed devices; copying tree instead");
            copy_tree(&src, &dest)?;
            fs::remove_dir_all(&src).map_err(io_error_with_help("remove source directory", &src))?;
            info!(src = %directory, dest = %new_directory, "copied directory and removed source");
        }
        Err(e) => return Err(io_error_with_help("move directory", &src)(e)),
    }
    Ok(new_directory.clone())
}
