//! Syntactic validation of raw path segments.
//! Pure functions, no I/O. Failures carry the offending value and a short reason.

use crate::errors::{PathError, Result};

/// Characters the platform refuses inside a single file or directory name.
#[cfg(windows)]
pub fn is_reserved_name_char(c: char) -> bool {
    matches!(c, '"' | '<' | '>' | '|' | ':' | '*' | '?' | '\\' | '/') || (c as u32) < 32
}

/// Characters the platform refuses inside a single file or directory name.
#[cfg(not(windows))]
pub fn is_reserved_name_char(c: char) -> bool {
    matches!(c, '/' | '\0')
}

fn has_reserved_chars(value: &str) -> bool {
    value.chars().any(is_reserved_name_char)
}

fn is_all_periods(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c == '.')
}

fn file_name_error(value: &str, reason: &'static str) -> PathError {
    PathError::InvalidFileName { value: value.to_string(), reason }
}

fn extension_error(value: &str, reason: &'static str) -> PathError {
    PathError::InvalidFileExtension { value: value.to_string(), reason }
}

/// A file name (or a file name without its extension).
pub fn validate_file_name(value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(file_name_error(value, "file name cannot be empty or white-space"));
    }
    if is_all_periods(value) {
        return Err(file_name_error(value, "file name cannot be all periods"));
    }
    if has_reserved_chars(value) {
        return Err(file_name_error(value, "file name contains invalid characters"));
    }
    Ok(())
}

/// A file extension. Empty means "no extension"; otherwise a period followed by
/// at least one character that is neither white-space nor a period.
pub fn validate_file_extension(value: &str) -> Result<()> {
    if value.is_empty() {
        return Ok(());
    }
    if value.chars().count() == 1 {
        return Err(extension_error(
            value,
            "file extension cannot be a single character; it must be a period followed by at least one other character",
        ));
    }
    if !value.starts_with('.') {
        return Err(extension_error(value, "file extension must begin with a period"));
    }
    if is_all_periods(value) {
        return Err(extension_error(value, "file extension cannot be all periods"));
    }
    if value[1..].trim().is_empty() {
        return Err(extension_error(value, "file extension cannot be just white-space after the period"));
    }
    if has_reserved_chars(value) {
        return Err(extension_error(value, "file extension contains invalid characters"));
    }
    Ok(())
}

/// A single directory name (one path segment).
pub fn validate_directory_name(value: &str) -> Result<()> {
    let err = |reason| PathError::InvalidDirectoryName { value: value.to_string(), reason };
    if value.trim().is_empty() {
        return Err(err("directory name cannot be empty or white-space"));
    }
    if is_all_periods(value) {
        return Err(err("directory name cannot be all periods"));
    }
    if has_reserved_chars(value) {
        return Err(err("directory name contains invalid characters"));
    }
    Ok(())
}
