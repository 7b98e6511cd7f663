//! Full directory paths, always terminated with the platform separator.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use super::directory_name::DirectoryName;
use super::file_name::FileName;
use super::file_path::FilePath;
use super::natural::{eq_ignore_case, starts_with_ignore_case};
use super::normalize::{full_path, path_to_str, validate_segments, with_trailing_separator};
use super::value::path_value;
use crate::errors::Result;
use crate::fs_ops::io_error_with_help;

#[derive(Clone)]
pub struct DirectoryPath {
    path: String,
    parent: OnceLock<Option<Box<DirectoryPath>>>,
    name: OnceLock<Option<DirectoryName>>,
}

path_value!(DirectoryPath);

impl DirectoryPath {
    /// Resolve `raw` to a full path and append a trailing separator if missing.
    pub fn new(raw: &str) -> Result<Self> {
        let full = full_path(raw)?;
        validate_segments(&full, false)?;
        Ok(Self::normalized(with_trailing_separator(full)))
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        Self::new(path_to_str(path)?)
    }

    /// `path` must already be full, normalized and separator-terminated.
    pub(crate) fn normalized(path: String) -> Self {
        Self { path, parent: OnceLock::new(), name: OnceLock::new() }
    }

    /// The process working directory.
    pub fn current() -> Result<Self> {
        let cwd = std::env::current_dir()
            .map_err(io_error_with_help("read current directory", Path::new(".")))?;
        Self::from_path(&cwd)
    }

    /// Per-user application data directory for `app_name`, when the platform has one.
    pub fn app_data(app_name: &DirectoryName) -> Option<Self> {
        let base = dirs::data_dir()?;
        Self::from_path(&base).ok().map(|d| d.append_dir(app_name))
    }

    pub fn as_str(&self) -> &str {
        &self.path
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.path)
    }

    /// The path without its trailing separator (roots keep theirs).
    pub fn to_path_buf(&self) -> PathBuf {
        self.as_path().components().collect()
    }

    /// Whether a directory exists at this path right now. Not cached.
    pub fn exists(&self) -> bool {
        self.as_path().is_dir()
    }

    /// The containing directory; `None` for a root. Cached after first use.
    pub fn parent(&self) -> Option<&DirectoryPath> {
        self.parent
            .get_or_init(|| {
                self.as_path()
                    .parent()
                    .map(|p| Box::new(Self::normalized(with_trailing_separator(p.to_string_lossy().into_owned()))))
            })
            .as_deref()
    }

    pub fn is_root(&self) -> bool {
        self.parent().is_none()
    }

    /// The last segment of the path; `None` for a root. Cached after first use.
    pub fn name(&self) -> Option<&DirectoryName> {
        self.name
            .get_or_init(|| {
                self.as_path()
                    .file_name()
                    .map(|n| DirectoryName::unchecked(n.to_string_lossy().into_owned()))
            })
            .as_ref()
    }

    pub fn append_dir(&self, sub_directory: &DirectoryName) -> DirectoryPath {
        Self::normalized(with_trailing_separator(format!("{}{}", self.path, sub_directory.as_str())))
    }

    pub fn append_file(&self, file_name: &FileName) -> FilePath {
        FilePath::from_parts(self, file_name)
    }

    /// Validate `file_name` and append it.
    pub fn file(&self, file_name: &str) -> Result<FilePath> {
        Ok(self.append_file(&FileName::new(file_name)?))
    }

    /// True when this directory lies somewhere beneath `ancestor`.
    ///
    /// Both paths end with a separator, so the prefix test only matches on whole
    /// segments (`/foobar/` is not below `/foo/`). A directory is not below itself.
    pub fn is_below(&self, ancestor: &DirectoryPath) -> bool {
        !eq_ignore_case(&self.path, &ancestor.path) && starts_with_ignore_case(&self.path, &ancestor.path)
    }
}

impl AsRef<Path> for DirectoryPath {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}
