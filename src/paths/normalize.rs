//! Resolution of raw strings to full, lexically normalized paths.
//!
//! Relative inputs are resolved against the current working directory at call
//! time; `.` segments are dropped and `..` segments pop the previous segment
//! (never above the root). The file system is not consulted, so symlinks are
//! left as written.

use std::path::{Component, MAIN_SEPARATOR, Path, PathBuf};

use super::validate::{validate_directory_name, validate_file_name};
use crate::errors::{PathError, Result};

pub(crate) fn invalid_path(value: &str, reason: impl Into<String>) -> PathError {
    PathError::InvalidPath { value: value.to_string(), reason: reason.into() }
}

pub(crate) fn ends_with_separator(s: &str) -> bool {
    s.chars().next_back().is_some_and(std::path::is_separator)
}

pub(crate) fn with_trailing_separator(mut s: String) -> String {
    if !ends_with_separator(&s) {
        s.push(MAIN_SEPARATOR);
    }
    s
}

fn lexical_normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in path.components() {
        match comp {
            Component::Prefix(_) | Component::RootDir => out.push(comp.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                }
            }
            Component::Normal(seg) => out.push(seg),
        }
    }
    out
}

/// Resolve `raw` to a full path string. The result has no trailing separator
/// unless it is a root.
pub(crate) fn full_path(raw: &str) -> Result<String> {
    if raw.trim().is_empty() {
        return Err(invalid_path(raw, "path cannot be empty or white-space"));
    }
    if raw.contains('\0') {
        return Err(invalid_path(raw, "path contains a null character"));
    }
    let absolute = std::path::absolute(raw).map_err(|e| invalid_path(raw, e.to_string()))?;
    let normalized = lexical_normalize(dunce::simplified(&absolute));
    normalized
        .into_os_string()
        .into_string()
        .map_err(|_| invalid_path(raw, "path is not valid UTF-8"))
}

/// Validate every named segment of a full path, so that names later derived
/// from it (`name()`, `parent()`, `directory_name()`) are valid values too.
/// With `file_last`, the final segment is checked as a file name.
pub(crate) fn validate_segments(full: &str, file_last: bool) -> Result<()> {
    let mut names: Vec<&str> = Path::new(full)
        .components()
        .filter_map(|c| match c {
            Component::Normal(seg) => seg.to_str(),
            _ => None,
        })
        .collect();
    let file = if file_last { names.pop() } else { None };
    for name in names {
        validate_directory_name(name)?;
    }
    file.map_or(Ok(()), validate_file_name)
}

/// Convert an OS path to a string for the value types.
pub(crate) fn path_to_str(path: &Path) -> Result<&str> {
    path.to_str()
        .ok_or_else(|| invalid_path(&path.to_string_lossy(), "path is not valid UTF-8"))
}
