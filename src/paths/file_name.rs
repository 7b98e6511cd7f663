//! File names, with and without their extension.

use std::sync::OnceLock;

use super::extension::{FileExtension, split_extension};
use super::validate::validate_file_name;
use super::value::path_value;
use crate::errors::Result;

/// A file's name including its extension, without any directory part.
#[derive(Clone)]
pub struct FileName {
    value: String,
    stem: OnceLock<FileNameWithoutExtension>,
    extension: OnceLock<FileExtension>,
}

path_value!(FileName);

impl FileName {
    pub fn new(value: &str) -> Result<Self> {
        validate_file_name(value)?;
        Ok(Self::unchecked(value.to_string()))
    }

    /// Used for names derived from an already valid path.
    pub(crate) fn unchecked(value: String) -> Self {
        Self { value, stem: OnceLock::new(), extension: OnceLock::new() }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The name with its extension removed. Cached after first use.
    pub fn without_extension(&self) -> &FileNameWithoutExtension {
        self.stem
            .get_or_init(|| FileNameWithoutExtension::unchecked(split_extension(&self.value).0.to_string()))
    }

    /// The extension (possibly none). Cached after first use.
    pub fn extension(&self) -> &FileExtension {
        self.extension.get_or_init(|| FileExtension::of_file_name(self))
    }

    /// Mask for files with the same name and any extension, e.g. `report.*`.
    pub fn mask(&self) -> String {
        self.without_extension().mask()
    }
}

/// A file's name with its extension removed.
#[derive(Clone)]
pub struct FileNameWithoutExtension {
    value: String,
}

path_value!(FileNameWithoutExtension);

impl FileNameWithoutExtension {
    pub fn new(value: &str) -> Result<Self> {
        validate_file_name(value)?;
        Ok(Self::unchecked(value.to_string()))
    }

    pub(crate) fn unchecked(value: String) -> Self {
        Self { value }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Join with an extension to form a full file name.
    pub fn with_extension(&self, extension: &FileExtension) -> FileName {
        FileName::unchecked(format!("{}{}", self.value, extension.as_str()))
    }

    pub fn mask(&self) -> String {
        format!("{}.*", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_parts_are_cached() {
        let name = FileName::new("Report.Final.PDF").unwrap();
        assert!(std::ptr::eq(name.without_extension(), name.without_extension()));
        assert!(std::ptr::eq(name.extension(), name.extension()));
        assert_eq!(name.without_extension().as_str(), "Report.Final");
        assert_eq!(name.extension().as_str(), ".pdf");
    }

    #[test]
    fn stem_and_extension_recompose() {
        for raw in ["a.txt", "noext", ".hidden", "dots.in.name.gz"] {
            let name = FileName::new(raw).unwrap();
            let rebuilt = name.without_extension().with_extension(name.extension());
            assert_eq!(rebuilt, name, "{raw}");
        }
    }

    #[test]
    fn equality_ignores_case_and_ordering_is_natural() {
        assert_eq!(FileName::new("A.TXT").unwrap(), FileName::new("a.txt").unwrap());
        let mut names: Vec<FileName> = ["file2.txt", "file10.txt", "file1.txt"]
            .iter()
            .map(|s| FileName::new(s).unwrap())
            .collect();
        names.sort();
        let sorted: Vec<&str> = names.iter().map(FileName::as_str).collect();
        assert_eq!(sorted, ["file1.txt", "file2.txt", "file10.txt"]);
    }

    #[test]
    fn masks() {
        assert_eq!(FileName::new("photo.jpg").unwrap().mask(), "photo.*");
    }

    #[test]
    fn invalid_names_rejected() {
        assert!(FileName::new(".").is_err());
        assert!(FileName::new("..").is_err());
        assert!(FileNameWithoutExtension::new("  ").is_err());
        assert!("report.txt".parse::<FileName>().is_ok());
    }
}
