//! Builder that records manifests instead of building.

use std::sync::{Arc, RwLock};

use pressplan_core::{
    application::{ApplicationError, ports::SiteBuilder},
    domain::Manifest,
    error::PressResult,
};

/// Keeps the last manifest it was handed. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct RecordingBuilder {
    inner: Arc<RwLock<Recorded>>,
}

#[derive(Debug, Default)]
struct Recorded {
    last: Option<Manifest>,
    builds: usize,
}

impl RecordingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<Manifest> {
        self.inner.read().ok()?.last.clone()
    }

    pub fn build_count(&self) -> usize {
        self.inner.read().map(|r| r.builds).unwrap_or(0)
    }
}

impl SiteBuilder for RecordingBuilder {
    fn build(&self, manifest: &Manifest) -> PressResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;
        inner.last = Some(manifest.clone());
        inner.builds += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page_source::MemoryPageSource;
    use pressplan_core::{
        application::BuildService,
        domain::{BuildContext, ProjectDescriptor},
    };

    #[test]
    fn records_the_last_build() {
        let pages = MemoryPageSource::new().with_dir("/w/site/src/pages", ["index.hbs"]);
        let builder = RecordingBuilder::new();
        let service = BuildService::new(Box::new(pages.clone()), Box::new(builder.clone()));
        let ctx = BuildContext::new(ProjectDescriptor::new("Site"), "/w/site").unwrap();

        service.build(&ctx).unwrap();
        pages.add_file("/w/site/src/pages", "about.hbs").unwrap();
        service.build(&ctx).unwrap();

        assert_eq!(builder.build_count(), 2);
        assert_eq!(builder.last().unwrap().artifact_count(), 2);
    }

    #[test]
    fn failed_assembly_records_nothing() {
        let builder = RecordingBuilder::new();
        let service = BuildService::new(
            Box::new(MemoryPageSource::new()),
            Box::new(builder.clone()),
        );
        let ctx = BuildContext::new(ProjectDescriptor::new("Site"), "/w/site").unwrap();

        assert!(service.build(&ctx).is_err());
        assert_eq!(builder.build_count(), 0);
        assert!(builder.last().is_none());
    }
}
