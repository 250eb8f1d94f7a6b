//! In-memory page source for testing.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use pressplan_core::{
    application::{ApplicationError, ports::PageSource},
    domain::TemplateFile,
    error::PressResult,
};

/// Directory listings held in memory, keyed by directory path.
///
/// Clones share state, so a test can keep a handle and add pages after the
/// source has been boxed into a service.
#[derive(Debug, Clone, Default)]
pub struct MemoryPageSource {
    inner: Arc<RwLock<BTreeMap<PathBuf, Vec<String>>>>,
}

impl MemoryPageSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `dir` with the given file names, in listing order.
    pub fn with_dir<I, S>(self, dir: impl Into<PathBuf>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Ok(mut inner) = self.inner.write() {
            inner.insert(dir.into(), names.into_iter().map(Into::into).collect());
        }
        self
    }

    /// Append one file to an existing or new directory.
    pub fn add_file(&self, dir: impl Into<PathBuf>, name: impl Into<String>) -> PressResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;
        inner.entry(dir.into()).or_default().push(name.into());
        Ok(())
    }

    pub fn remove_dir(&self, dir: &Path) -> PressResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;
        inner.remove(dir);
        Ok(())
    }
}

impl PageSource for MemoryPageSource {
    fn discover(&self, dir: &Path) -> PressResult<Vec<TemplateFile>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        let names = inner
            .get(dir)
            .ok_or_else(|| ApplicationError::PagesDirMissing {
                path: dir.to_path_buf(),
            })?;

        names
            .iter()
            .map(|name| Ok(TemplateFile::from_path(dir.join(name))?))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let source = MemoryPageSource::new().with_dir("/p", ["b.hbs", "a.hbs"]);
        let files = source.discover(Path::new("/p")).unwrap();

        let names: Vec<_> = files.iter().map(|f| f.base_name()).collect();
        assert_eq!(names, ["b", "a"]);
    }

    #[test]
    fn clones_share_state() {
        let source = MemoryPageSource::new();
        let handle = source.clone();
        handle.add_file("/p", "index.hbs").unwrap();

        assert_eq!(source.discover(Path::new("/p")).unwrap().len(), 1);

        handle.remove_dir(Path::new("/p")).unwrap();
        assert!(source.discover(Path::new("/p")).is_err());
    }

    #[test]
    fn unknown_dir_is_missing() {
        assert!(MemoryPageSource::new().discover(Path::new("/x")).is_err());
    }
}
