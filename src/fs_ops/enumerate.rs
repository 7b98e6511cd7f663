//! Lazy directory listings.
//!
//! The directory must exist when the call is made; entries are then produced
//! as the walk proceeds. Patterns are masks in the Windows sense: `*` and `?`
//! are the only wildcards, brackets are literal, and matching is
//! case-insensitive against the entry name only.
//!
//! Symbolic links are reported by what they point at (a link to a file is a
//! file) but never followed during a recursive walk.

use glob::{MatchOptions, Pattern};
use std::io;
use walkdir::{DirEntry, WalkDir};

use super::helpers::io_error_with_help;
use crate::errors::{PathError, Result};
use crate::paths::{DirectoryPath, FileExtension, FilePath};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Translate a mask into glob syntax: brackets become literal classes and runs
/// of `*` collapse to one.
fn mask_to_glob(mask: &str) -> String {
    let mut out = String::with_capacity(mask.len());
    for c in mask.chars() {
        match c {
            '[' => out.push_str("[[]"),
            ']' => out.push_str("[]]"),
            '*' if out.ends_with('*') => {}
            _ => out.push(c),
        }
    }
    out
}

fn compile(pattern: &str) -> Result<Pattern> {
    let invalid = |reason: &str| PathError::InvalidPattern { pattern: pattern.to_string(), reason: reason.to_string() };
    if pattern.is_empty() {
        return Err(invalid("pattern cannot be empty"));
    }
    if pattern.contains(std::path::is_separator) {
        return Err(invalid("pattern matches names only and cannot contain a directory separator"));
    }
    // `*.*` means every entry, with or without a period.
    let effective = if pattern == "*.*" { "*".to_string() } else { mask_to_glob(pattern) };
    Pattern::new(&effective).map_err(|e| invalid(&e.to_string()))
}

/// File or directory, looking through a symbolic link at its target.
fn is_kind(entry: &DirEntry, want_dir: bool) -> bool {
    let ft = entry.file_type();
    if ft.is_symlink() {
        let target = entry.path();
        if want_dir { target.is_dir() } else { target.is_file() }
    } else if want_dir {
        ft.is_dir()
    } else {
        ft.is_file()
    }
}

fn walk(directory: &DirectoryPath, recursive: bool) -> Result<walkdir::IntoIter> {
    if !directory.exists() {
        return Err(PathError::DirectoryNotFound(directory.to_path_buf()));
    }
    let max_depth = if recursive { usize::MAX } else { 1 };
    Ok(WalkDir::new(directory.as_path()).min_depth(1).max_depth(max_depth).into_iter())
}

fn walk_error(directory: &DirectoryPath, e: walkdir::Error) -> PathError {
    let path = e.path().map(|p| p.to_path_buf()).unwrap_or_else(|| directory.to_path_buf());
    io_error_with_help("read directory", &path)(io::Error::from(e))
}

fn name_matches(entry: &DirEntry, pattern: Option<&Pattern>) -> bool {
    match pattern {
        None => true,
        Some(p) => entry
            .file_name()
            .to_str()
            .is_some_and(|name| p.matches_with(name, MATCH_OPTIONS)),
    }
}

/// Files in `directory` whose names match `pattern` (all files when `None`).
pub fn enumerate_files(
    directory: &DirectoryPath,
    pattern: Option<&str>,
    recursive: bool,
) -> Result<impl Iterator<Item = Result<FilePath>> + use<>> {
    let pattern = pattern.map(compile).transpose()?;
    let root = directory.clone();
    Ok(walk(directory, recursive)?.filter_map(move |entry| match entry {
        Err(e) => Some(Err(walk_error(&root, e))),
        Ok(e) if is_kind(&e, false) && name_matches(&e, pattern.as_ref()) => {
            Some(FilePath::from_path(e.path()))
        }
        Ok(_) => None,
    }))
}

/// Subdirectories of `directory` whose names match `pattern` (all when `None`).
pub fn enumerate_directories(
    directory: &DirectoryPath,
    pattern: Option<&str>,
    recursive: bool,
) -> Result<impl Iterator<Item = Result<DirectoryPath>> + use<>> {
    let pattern = pattern.map(compile).transpose()?;
    let root = directory.clone();
    Ok(walk(directory, recursive)?.filter_map(move |entry| match entry {
        Err(e) => Some(Err(walk_error(&root, e))),
        Ok(e) if is_kind(&e, true) && name_matches(&e, pattern.as_ref()) => {
            Some(DirectoryPath::from_path(e.path()))
        }
        Ok(_) => None,
    }))
}

/// Files in `directory` with exactly `extension`; `FileExtension::none()` selects files without one.
pub fn enumerate_files_with_extension(
    directory: &DirectoryPath,
    extension: &FileExtension,
    recursive: bool,
) -> Result<impl Iterator<Item = Result<FilePath>> + use<>> {
    let wanted = extension.clone();
    Ok(enumerate_files(directory, None, recursive)?.filter(move |item| match item {
        Ok(file) => file.extension() == &wanted,
        Err(_) => true,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn names(files: impl Iterator<Item = Result<FilePath>>) -> Vec<String> {
        let mut v: Vec<String> = files.map(|f| f.unwrap().name().to_string()).collect();
        v.sort();
        v
    }

    fn fixture() -> (tempfile::TempDir, DirectoryPath) {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("a.TXT"), b"").unwrap();
        fs::write(tmp.path().join("b.log"), b"").unwrap();
        fs::write(tmp.path().join("noext"), b"").unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        fs::write(tmp.path().join("sub").join("c.txt"), b"").unwrap();
        let dir = DirectoryPath::from_path(tmp.path()).unwrap();
        (tmp, dir)
    }

    #[test]
    fn top_level_only_by_default() {
        let (_tmp, dir) = fixture();
        assert_eq!(names(enumerate_files(&dir, None, false).unwrap()), ["a.TXT", "b.log", "noext"]);
        assert_eq!(names(enumerate_files(&dir, Some("*.*"), false).unwrap()).len(), 3);
    }

    #[test]
    fn pattern_is_case_insensitive_and_recursive_descends() {
        let (_tmp, dir) = fixture();
        assert_eq!(names(enumerate_files(&dir, Some("*.txt"), true).unwrap()), ["a.TXT", "c.txt"]);
    }

    #[test]
    fn by_extension_including_none() {
        let (_tmp, dir) = fixture();
        let txt = FileExtension::new(".txt").unwrap();
        assert_eq!(names(enumerate_files_with_extension(&dir, &txt, false).unwrap()), ["a.TXT"]);
        assert_eq!(
            names(enumerate_files_with_extension(&dir, &FileExtension::none(), false).unwrap()),
            ["noext"]
        );
    }

    #[test]
    fn directories_listed() {
        let (_tmp, dir) = fixture();
        let subs: Vec<DirectoryPath> = enumerate_directories(&dir, None, true).unwrap().map(|d| d.unwrap()).collect();
        assert_eq!(subs.len(), 1);
        assert!(subs[0].is_below(&dir));
        assert!(enumerate_directories(&dir, Some("zzz*"), false).unwrap().next().is_none());
    }

    #[test]
    fn missing_directory_fails_at_call_time() {
        let tmp = tempdir().unwrap();
        let dir = DirectoryPath::from_path(&tmp.path().join("missing")).unwrap();
        assert!(matches!(enumerate_files(&dir, None, false), Err(PathError::DirectoryNotFound(_))));
        assert!(matches!(enumerate_directories(&dir, None, true), Err(PathError::DirectoryNotFound(_))));
    }

    #[test]
    fn bad_patterns_rejected() {
        let (_tmp, dir) = fixture();
        assert!(matches!(enumerate_files(&dir, Some("sub/*"), false), Err(PathError::InvalidPattern { .. })));
        assert!(matches!(enumerate_directories(&dir, Some(""), false), Err(PathError::InvalidPattern { .. })));
    }

    #[test]
    fn brackets_are_literal() {
        let (tmp, dir) = fixture();
        fs::write(tmp.path().join("[draft] plan.txt"), b"").unwrap();
        fs::write(tmp.path().join("d plan.txt"), b"").unwrap();
        assert_eq!(names(enumerate_files(&dir, Some("[draft]*"), false).unwrap()), ["[draft] plan.txt"]);
        assert_eq!(names(enumerate_files(&dir, Some("[a"), false).unwrap()), Vec::<String>::new());
        assert_eq!(mask_to_glob("a**b[1]"), "a*b[[]1[]]");
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_reported_by_target_but_not_followed() {
        let (tmp, dir) = fixture();
        std::os::unix::fs::symlink(tmp.path().join("b.log"), tmp.path().join("link.log")).unwrap();
        std::os::unix::fs::symlink(tmp.path().join("sub"), tmp.path().join("sublink")).unwrap();
        assert_eq!(names(enumerate_files(&dir, Some("*.log"), false).unwrap()), ["b.log", "link.log"]);
        assert_eq!(names(enumerate_files(&dir, Some("c.txt"), true).unwrap()), ["c.txt"]);
        let subs = enumerate_directories(&dir, None, false).unwrap().count();
        assert_eq!(subs, 2);
    }

    #[test]
    fn sequence_is_lazy_and_rescans() {
        let (tmp, dir) = fixture();
        let first = enumerate_files(&dir, Some("late.*"), false).unwrap();
        fs::write(tmp.path().join("late.txt"), b"").unwrap();
        assert_eq!(names(first), ["late.txt"]);
        assert_eq!(names(enumerate_files(&dir, Some("late.*"), false).unwrap()), ["late.txt"]);
    }
}
