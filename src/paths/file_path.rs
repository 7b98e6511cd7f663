//! Full file paths. Never terminated with a separator.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use super::directory_name::DirectoryName;
use super::directory_path::DirectoryPath;
use super::extension::FileExtension;
use super::file_name::{FileName, FileNameWithoutExtension};
use super::normalize::{ends_with_separator, full_path, invalid_path, path_to_str, validate_segments};
use super::validate::validate_file_name;
use super::value::path_value;
use crate::errors::Result;

#[derive(Clone)]
pub struct FilePath {
    path: String,
    name: OnceLock<FileName>,
    directory: OnceLock<DirectoryPath>,
}

path_value!(FilePath);

impl FilePath {
    /// Resolve `raw` to a full path. Input ending with a separator names a
    /// directory and is rejected.
    pub fn new(raw: &str) -> Result<Self> {
        if ends_with_separator(raw) {
            return Err(invalid_path(raw, "a file path cannot end with a directory separator"));
        }
        let full = full_path(raw)?;
        if ends_with_separator(&full) || Path::new(&full).file_name().is_none() {
            return Err(invalid_path(raw, "path does not name a file"));
        }
        validate_segments(&full, true)?;
        Ok(Self::normalized(full))
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        Self::new(path_to_str(path)?)
    }

    /// Join a directory and a file name. No validation and no file system access.
    pub fn from_parts(directory: &DirectoryPath, name: &FileName) -> Self {
        let path = Self::normalized(format!("{}{}", directory.as_str(), name.as_str()));
        let _ = path.directory.set(directory.clone());
        let _ = path.name.set(name.clone());
        path
    }

    fn normalized(path: String) -> Self {
        Self { path, name: OnceLock::new(), directory: OnceLock::new() }
    }

    /// Byte offset where the file name starts.
    fn name_start(&self) -> usize {
        self.path.rfind(std::path::is_separator).map_or(0, |i| i + 1)
    }

    pub fn as_str(&self) -> &str {
        &self.path
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.path)
    }

    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf::from(&self.path)
    }

    /// Whether a regular file exists at this path right now. Not cached.
    pub fn exists(&self) -> bool {
        self.as_path().is_file()
    }

    pub fn name(&self) -> &FileName {
        self.name
            .get_or_init(|| FileName::unchecked(self.path[self.name_start()..].to_string()))
    }

    pub fn name_without_extension(&self) -> &FileNameWithoutExtension {
        self.name().without_extension()
    }

    pub fn extension(&self) -> &FileExtension {
        self.name().extension()
    }

    /// The containing directory, separator-terminated.
    pub fn directory(&self) -> &DirectoryPath {
        self.directory
            .get_or_init(|| DirectoryPath::normalized(self.path[..self.name_start()].to_string()))
    }

    /// Name of the containing directory; `None` when the file sits in a root.
    pub fn directory_name(&self) -> Option<&DirectoryName> {
        self.directory().name()
    }

    /// Replace the extension. A trailing period on the stem is dropped first, so
    /// `trailing.` becomes `trailing.png` rather than `trailing..png`.
    pub fn change_extension(&self, extension: &FileExtension) -> FilePath {
        let stem = self.name_without_extension().as_str();
        let base = stem
            .strip_suffix('.')
            .filter(|s| validate_file_name(s).is_ok())
            .unwrap_or(stem);
        self.change_name(&FileName::unchecked(format!("{base}{}", extension.as_str())))
    }

    pub fn change_name(&self, name: &FileName) -> FilePath {
        Self::from_parts(self.directory(), name)
    }

    /// Keep the extension and replace the part before it.
    pub fn change_stem(&self, stem: &FileNameWithoutExtension) -> FilePath {
        self.change_name(&stem.with_extension(self.extension()))
    }

    /// Derive a new name from the current one; the result is validated.
    pub fn change_name_with<F>(&self, f: F) -> Result<FilePath>
    where
        F: FnOnce(&FileName) -> String,
    {
        let name = FileName::new(&f(self.name()))?;
        Ok(self.change_name(&name))
    }

    pub fn change_directory(&self, directory: &DirectoryPath) -> FilePath {
        Self::from_parts(directory, self.name())
    }
}

impl AsRef<Path> for FilePath {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}
