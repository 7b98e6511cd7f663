//! File extensions, interned process-wide.
//!
//! Every extension text maps to exactly one shared instance: the cache is keyed
//! by the lower-cased text and guarded by a single mutex around the
//! lookup-or-insert. Entries are never evicted.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, LazyLock};
use tracing::debug;

use super::file_name::FileName;
use super::file_path::FilePath;
use super::validate::{validate_file_extension, validate_file_name};
use super::value::path_value;
use crate::errors::Result;

static CACHE: LazyLock<Mutex<HashMap<String, FileExtension>>> = LazyLock::new(|| Mutex::new(HashMap::new()));

/// A file's extension including the leading period (`.txt`), or empty for none.
/// The stored text is lower-case.
#[derive(Clone)]
pub struct FileExtension(Arc<str>);

path_value!(FileExtension);

/// Split a file name at its extension. The two halves always concatenate back
/// to the original name. A suffix is only an extension when it and the stem both
/// validate: `.bashrc`, `trailing.` and `file. ` have none.
pub(crate) fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(i) if i > 0 => {
            let (stem, ext) = name.split_at(i);
            if validate_file_extension(ext).is_ok() && validate_file_name(stem).is_ok() {
                (stem, ext)
            } else {
                (name, "")
            }
        }
        _ => (name, ""),
    }
}

fn intern(extension: &str) -> FileExtension {
    let key = extension.to_lowercase();
    let mut cache = CACHE.lock();
    if let Some(existing) = cache.get(&key) {
        return existing.clone();
    }
    debug!(extension = %key, "interning file extension");
    let created = FileExtension(Arc::from(key.as_str()));
    cache.insert(key, created.clone());
    created
}

impl FileExtension {
    /// Validate and return the shared instance for `value` (any casing).
    pub fn new(value: &str) -> Result<Self> {
        validate_file_extension(value)?;
        Ok(intern(value))
    }

    /// The shared "no extension" instance.
    pub fn none() -> Self {
        intern("")
    }

    pub fn of_file_name(name: &FileName) -> Self {
        intern(split_extension(name.as_str()).1)
    }

    pub fn of_file_path(path: &FilePath) -> Self {
        Self::of_file_name(path.name())
    }

    /// Extension of the last segment of an arbitrary path; none when the path has no file name.
    pub fn of_path(path: &Path) -> Self {
        match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => intern(split_extension(name).1),
            None => Self::none(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_none(&self) -> bool {
        self.0.is_empty()
    }

    /// True when both handles are the same cached instance.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    /// Mask matching every file with this extension, e.g. `*.txt`.
    pub fn mask(&self) -> String {
        self.mask_with("*")
    }

    /// Mask combining a name mask with this extension, e.g. `report*` -> `report*.txt`.
    pub fn mask_with(&self, name_mask: &str) -> String {
        format!("{name_mask}{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::FileNameWithoutExtension;
    use std::thread;

    #[test]
    fn same_text_any_case_is_same_instance() {
        let a = FileExtension::new(".TxT").unwrap();
        let b = FileExtension::new(".txt").unwrap();
        assert!(FileExtension::ptr_eq(&a, &b));
        assert_eq!(a.as_str(), ".txt");
    }

    #[test]
    fn empty_is_no_extension() {
        let none = FileExtension::new("").unwrap();
        assert!(none.is_none());
        assert!(FileExtension::ptr_eq(&none, &FileExtension::none()));
    }

    #[test]
    fn single_char_and_bare_text_rejected() {
        assert!(FileExtension::new(".").is_err());
        assert!(FileExtension::new("x").is_err());
        assert!(FileExtension::new("txt").is_err());
    }

    #[test]
    fn concurrent_requests_share_one_instance() {
        let handles: Vec<_> = (0..16)
            .map(|i| {
                thread::spawn(move || {
                    let text = if i % 2 == 0 { ".ConcurrentExt" } else { ".concurrentext" };
                    FileExtension::new(text).unwrap()
                })
            })
            .collect();
        let all: Vec<FileExtension> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for ext in &all[1..] {
            assert!(FileExtension::ptr_eq(&all[0], ext));
        }
    }

    #[test]
    fn split_rules() {
        assert_eq!(split_extension("report.txt"), ("report", ".txt"));
        assert_eq!(split_extension("archive.tar.gz"), ("archive.tar", ".gz"));
        assert_eq!(split_extension(".bashrc"), (".bashrc", ""));
        assert_eq!(split_extension("trailing."), ("trailing.", ""));
        assert_eq!(split_extension("plain"), ("plain", ""));
        assert_eq!(split_extension("file. "), ("file. ", ""));
        assert_eq!(split_extension("..txt"), ("..txt", ""));
        assert_eq!(split_extension("a..b"), ("a.", ".b"));
    }

    #[test]
    fn derived_extensions_always_validate() {
        for raw in ["file. ", "x.", "..ext", "name.tar.gz", "a. .b"] {
            let name = FileName::new(raw).unwrap();
            let ext = name.extension();
            assert!(FileExtension::new(ext.as_str()).is_ok(), "{raw}");
            assert!(FileNameWithoutExtension::new(name.without_extension().as_str()).is_ok(), "{raw}");
        }
    }

    #[test]
    fn masks() {
        let ext = FileExtension::new(".log").unwrap();
        assert_eq!(ext.mask(), "*.log");
        assert_eq!(ext.mask_with("app-*"), "app-*.log");
    }

    #[test]
    fn of_path_uses_last_segment() {
        let ext = FileExtension::of_path(Path::new("/tmp/dir.d/file.JSON"));
        assert_eq!(ext.as_str(), ".json");
        assert!(FileExtension::of_path(Path::new("/")).is_none());
    }
}
