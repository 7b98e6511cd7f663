//! Core library for `pw_io`.
//!
//! Immutable, case-insensitive path value objects (`FilePath`, `DirectoryPath`
//! and their segment types), thin file system operations over them, and a
//! retry-open primitive for files another process may be holding.
//!
//! ```no_run
//! use std::time::Duration;
//! use pw_io::{FilePath, OpenRequest, RetryPolicy, wait_for_access};
//!
//! let file = FilePath::new("incoming/report.csv")?;
//! let policy = RetryPolicy::new(Duration::from_secs(2));
//! if let Some(f) = wait_for_access(&file, &OpenRequest::shared_read(), policy)?.into_file() {
//!     // read from `f`
//!     # drop(f);
//! }
//! # Ok::<(), pw_io::PathError>(())
//! ```

pub mod access;
pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod output;
pub mod paths;
pub mod platform;
pub mod shutdown;

pub use access::{
    AccessOutcome, CreationDisposition, FileAccess, FileShare, OpenRequest, RetryPolicy, is_read_locked, is_readable,
    wait_for_access, wait_for_access_async, wait_for_access_until, wait_for_read,
};
pub use config::{Config, LogLevel};
pub use errors::{PathError, Result};
pub use fs_ops::{
    create_directory, create_subdirectories, enumerate_directories, enumerate_files, enumerate_files_with_extension,
    move_directory, move_file, move_file_to, recycle_directory, recycle_file, rename_file,
};
pub use paths::{
    DirectoryName, DirectoryPath, FileExtension, FileName, FileNameWithoutExtension, FilePath, SortOrder, natural_cmp,
    natural_cmp_with,
};
