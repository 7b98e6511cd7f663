//! Typed error definitions for pw_io.
//! Every public operation fails with one of these; nothing is returned as a bare io::Error.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the library.
pub type Result<T, E = PathError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum PathError {
    #[error("Invalid file name '{value}': {reason}")]
    InvalidFileName { value: String, reason: &'static str },

    #[error("Invalid file extension '{value}': {reason}")]
    InvalidFileExtension { value: String, reason: &'static str },

    #[error("Invalid directory name '{value}': {reason}")]
    InvalidDirectoryName { value: String, reason: &'static str },

    /// The raw string was rejected while resolving it to a full path.
    #[error("Invalid path '{value}': {reason}")]
    InvalidPath { value: String, reason: String },

    #[error("Invalid search pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("{op} '{}': {source}{hint}", path.display())]
    Os {
        op: &'static str,
        path: PathBuf,
        hint: &'static str,
        #[source]
        source: io::Error,
    },

    /// The platform trash facility refused the request or is not available
    /// (e.g. a service without an interactive session).
    #[error("Cannot recycle '{}': {reason}", path.display())]
    RecycleUnavailable { path: PathBuf, reason: String },
}

impl PathError {
    /// Stable numeric code, used as a structured log field and process exit code.
    pub fn code(&self) -> i32 {
        match self {
            PathError::InvalidFileName { .. } => 10,
            PathError::InvalidFileExtension { .. } => 11,
            PathError::InvalidDirectoryName { .. } => 12,
            PathError::InvalidPath { .. } => 13,
            PathError::InvalidPattern { .. } => 14,
            PathError::FileNotFound(_) => 20,
            PathError::DirectoryNotFound(_) => 21,
            PathError::Os { .. } => 30,
            PathError::RecycleUnavailable { .. } => 31,
        }
    }

    /// Short machine-readable label.
    pub fn kind(&self) -> &'static str {
        match self {
            PathError::InvalidFileName { .. } => "invalid_file_name",
            PathError::InvalidFileExtension { .. } => "invalid_file_extension",
            PathError::InvalidDirectoryName { .. } => "invalid_directory_name",
            PathError::InvalidPath { .. } => "invalid_path",
            PathError::InvalidPattern { .. } => "invalid_pattern",
            PathError::FileNotFound(_) => "file_not_found",
            PathError::DirectoryNotFound(_) => "directory_not_found",
            PathError::Os { .. } => "os_error",
            PathError::RecycleUnavailable { .. } => "recycle_unavailable",
        }
    }

    /// Raw OS error code for `Os` failures.
    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            PathError::Os { source, .. } => source.raw_os_error(),
            _ => None,
        }
    }

    /// True for the two "required path is missing" variants.
    pub fn is_not_found(&self) -> bool {
        matches!(self, PathError::FileNotFound(_) | PathError::DirectoryNotFound(_))
    }
}
