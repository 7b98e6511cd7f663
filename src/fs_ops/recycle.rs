//! Soft delete into the platform trash / recycle bin.
//! Services and headless sessions often have no trash; that surfaces as
//! `PathError::RecycleUnavailable`, which callers should expect there.

use tracing::info;

use crate::errors::{PathError, Result};
use crate::paths::{DirectoryPath, FilePath};

fn unavailable(path: std::path::PathBuf, e: trash::Error) -> PathError {
    PathError::RecycleUnavailable { path, reason: e.to_string() }
}

pub fn recycle_file(file: &FilePath) -> Result<()> {
    if !file.exists() {
        return Err(PathError::FileNotFound(file.to_path_buf()));
    }
    trash::delete(file.as_path()).map_err(|e| unavailable(file.to_path_buf(), e))?;
    info!(path = %file, "sent file to trash");
    Ok(())
}

pub fn recycle_directory(directory: &DirectoryPath) -> Result<()> {
    if !directory.exists() {
        return Err(PathError::DirectoryNotFound(directory.to_path_buf()));
    }
    trash::delete(directory.to_path_buf()).map_err(|e| unavailable(directory.to_path_buf(), e))?;
    info!(path = %directory, "sent directory to trash");
    Ok(())
}
