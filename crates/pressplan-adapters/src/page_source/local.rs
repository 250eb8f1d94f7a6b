//! Local page discovery using walkdir.

use std::path::Path;

use tracing::{debug, instrument};
use walkdir::WalkDir;

use pressplan_core::{
    application::{ApplicationError, ports::PageSource},
    domain::TemplateFile,
    error::{PressError, PressResult},
};

/// Lists the regular files directly inside a directory.
///
/// Entries come back sorted by file name so two runs over the same directory
/// produce the same manifest. Subdirectories and symlinks are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalPageSource;

impl LocalPageSource {
    pub fn new() -> Self {
        Self
    }
}

impl PageSource for LocalPageSource {
    #[instrument(skip(self), fields(dir = %dir.display()))]
    fn discover(&self, dir: &Path) -> PressResult<Vec<TemplateFile>> {
        if !dir.is_dir() {
            return Err(ApplicationError::PagesDirMissing {
                path: dir.to_path_buf(),
            }
            .into());
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| map_walk_error(dir, e))?;

            if !entry.file_type().is_file() {
                debug!(path = %entry.path().display(), "Skipping non-file entry");
                continue;
            }

            files.push(TemplateFile::from_path(entry.into_path())?);
        }

        Ok(files)
    }
}

fn map_walk_error(dir: &Path, e: walkdir::Error) -> PressError {
    ApplicationError::Discovery {
        path: e.path().unwrap_or(dir).to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn names(files: &[TemplateFile]) -> Vec<String> {
        files
            .iter()
            .map(|f| f.source_path().file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn lists_files_sorted_and_flat() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("index.hbs"), "").unwrap();
        fs::write(temp.path().join("about.hbs"), "").unwrap();
        fs::write(temp.path().join("contact.php"), "").unwrap();
        fs::create_dir(temp.path().join("partials")).unwrap();
        fs::write(temp.path().join("partials/header.hbs"), "").unwrap();

        let files = LocalPageSource::new().discover(temp.path()).unwrap();

        assert_eq!(names(&files), ["about.hbs", "contact.php", "index.hbs"]);
        assert_eq!(files[0].base_name(), "about");
        assert_eq!(files[0].extension(), "hbs");
    }

    #[test]
    fn non_templates_are_still_listed() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("notes.txt"), "").unwrap();

        let files = LocalPageSource::new().discover(temp.path()).unwrap();
        assert_eq!(names(&files), ["notes.txt"]);
    }

    #[test]
    fn empty_dir_is_empty_list() {
        let temp = TempDir::new().unwrap();
        assert!(LocalPageSource::new().discover(temp.path()).unwrap().is_empty());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn non_utf8_file_name_fails_discovery() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        use pressplan_core::domain::DomainError;

        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(OsStr::from_bytes(b"a\xff.hbs")), "").unwrap();
        fs::write(temp.path().join(OsStr::from_bytes(b"a\xfe.hbs")), "").unwrap();

        let err = LocalPageSource::new().discover(temp.path()).unwrap_err();
        assert!(matches!(
            err,
            PressError::Domain(DomainError::InvalidValue { field: "template path", .. })
        ));
    }

    #[test]
    fn missing_dir_is_an_error() {
        let temp = TempDir::new().unwrap();
        let err = LocalPageSource::new()
            .discover(&temp.path().join("nope"))
            .unwrap_err();

        assert!(matches!(
            err,
            PressError::Application(ApplicationError::PagesDirMissing { .. })
        ));
    }

    #[test]
    fn file_instead_of_dir_is_an_error() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("index.hbs");
        fs::write(&file, "").unwrap();

        assert!(LocalPageSource::new().discover(&file).is_err());
    }

    #[test]
    fn repeated_listing_is_identical() {
        let temp = TempDir::new().unwrap();
        for name in ["c.hbs", "a.php", "b.hbs"] {
            fs::write(temp.path().join(name), "").unwrap();
        }

        let source = LocalPageSource::new();
        assert_eq!(
            source.discover(temp.path()).unwrap(),
            source.discover(temp.path()).unwrap()
        );
    }
}
