//! A single directory name, without the rest of its path.

use super::validate::validate_directory_name;
use super::value::path_value;
use crate::errors::Result;

#[derive(Clone)]
pub struct DirectoryName {
    value: String,
}

path_value!(DirectoryName);

impl DirectoryName {
    pub fn new(value: &str) -> Result<Self> {
        validate_directory_name(value)?;
        Ok(Self::unchecked(value.to_string()))
    }

    pub(crate) fn unchecked(value: String) -> Self {
        Self { value }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}
