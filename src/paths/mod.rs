//! Immutable path value objects.
//!
//! Names (`FileName`, `FileNameWithoutExtension`, `FileExtension`, `DirectoryName`)
//! are single validated segments. `FilePath` and `DirectoryPath` hold full,
//! normalized paths and derive their segments lazily. All types compare
//! case-insensitively and order naturally (`file2` before `file10`).

mod directory_name;
mod directory_path;
mod extension;
mod file_name;
mod file_path;
pub mod natural;
mod normalize;
pub mod validate;
mod value;

pub use directory_name::DirectoryName;
pub use directory_path::DirectoryPath;
pub use extension::FileExtension;
pub use file_name::{FileName, FileNameWithoutExtension};
pub use file_path::FilePath;
pub use natural::{SortOrder, natural_cmp, natural_cmp_with};
