//! File system operations over the path value types.

mod dir_move;
mod enumerate;
mod file_move;
mod helpers;
mod recycle;

pub use dir_move::{create_directory, create_subdirectories, move_directory};
pub use enumerate::{enumerate_directories, enumerate_files, enumerate_files_with_extension};
pub use file_move::{move_file, move_file_to, rename_file};
pub use recycle::{recycle_directory, recycle_file};

pub(crate) use helpers::io_error_with_help;
