use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::error::DomainError;

/// One file found by page discovery.
///
/// Identity is the source path; base name and extension are derived from it
/// once and never change. Only the final extension is split off, so
/// `about.en.hbs` has base name `about.en` and extension `hbs`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateFile {
    base_name: String,
    extension: String,
    source_path: PathBuf,
}

impl TemplateFile {
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let source_path = path.into();

        if source_path.file_name().is_none() {
            return Err(DomainError::InvalidValue {
                field: "template path",
                reason: format!("'{}' does not name a file", source_path.display()),
            });
        }

        // Output names reuse the base name byte for byte, so a name that is
        // not UTF-8 cannot be carried over.
        let utf8 = |part: Option<&std::ffi::OsStr>| -> Result<String, DomainError> {
            part.map_or(Ok(String::new()), |s| {
                s.to_str().map(str::to_owned).ok_or_else(|| DomainError::InvalidValue {
                    field: "template path",
                    reason: format!("'{}' is not valid UTF-8", source_path.display()),
                })
            })
        };

        // `file_stem` keeps dot-files whole (".hbs" has no extension).
        let base_name = utf8(source_path.file_stem())?;
        let extension = utf8(source_path.extension())?;

        Ok(Self {
            base_name,
            extension,
            source_path,
        })
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Final extension without the leading dot; empty when there is none.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }
}

impl fmt::Display for TemplateFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source_path.display())
    }
}
