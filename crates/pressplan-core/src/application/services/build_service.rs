//! Build Service - plan, then hand the manifest to the site builder.

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ManifestService,
        ports::{PageSource, SiteBuilder},
    },
    domain::{BuildContext, Manifest},
    error::PressResult,
};

/// Plans a build and delivers the manifest to a [`SiteBuilder`].
pub struct BuildService {
    planner: ManifestService,
    builder: Box<dyn SiteBuilder>,
}

impl BuildService {
    pub fn new(pages: Box<dyn PageSource>, builder: Box<dyn SiteBuilder>) -> Self {
        Self {
            planner: ManifestService::new(pages),
            builder,
        }
    }

    /// Assemble without building.
    pub fn plan(&self, ctx: &BuildContext) -> PressResult<Manifest> {
        self.planner.assemble(ctx)
    }

    /// Assemble and hand over. The builder only ever sees a complete
    /// manifest; when assembly fails it is not called at all.
    #[instrument(skip_all, fields(project = %ctx.project_name()))]
    pub fn build(&self, ctx: &BuildContext) -> PressResult<Manifest> {
        let manifest = self.planner.assemble(ctx)?;

        if let Err(e) = self.builder.build(&manifest) {
            warn!(error = %e, "Site builder failed");
            return Err(e);
        }

        info!(artifacts = manifest.artifact_count(), "Build handed off");
        Ok(manifest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{
        ApplicationError,
        ports::{MockPageSource, MockSiteBuilder},
    };
    use crate::domain::{ProjectDescriptor, TemplateFile};
    use crate::error::PressError;

    fn ctx(descriptor: ProjectDescriptor) -> BuildContext {
        BuildContext::new(descriptor, "/work/site").unwrap()
    }

    fn pages() -> MockPageSource {
        let mut source = MockPageSource::new();
        source
            .expect_discover()
            .returning(|dir| Ok(vec![TemplateFile::from_path(dir.join("index.hbs")).unwrap()]));
        source
    }

    #[test]
    fn builder_receives_the_manifest() {
        let mut builder = MockSiteBuilder::new();
        builder
            .expect_build()
            .withf(|m: &Manifest| m.output_filenames().eq(["index.html"]))
            .times(1)
            .returning(|_| Ok(()));

        let service = BuildService::new(Box::new(pages()), Box::new(builder));
        let manifest = service.build(&ctx(ProjectDescriptor::new("Site"))).unwrap();

        assert_eq!(manifest.artifact_count(), 1);
    }

    #[test]
    fn builder_is_skipped_when_assembly_fails() {
        let mut source = MockPageSource::new();
        source.expect_discover().times(0);
        let mut builder = MockSiteBuilder::new();
        builder.expect_build().times(0);

        let service = BuildService::new(Box::new(source), Box::new(builder));
        let result = service.build(&ctx(ProjectDescriptor::new("Site").apache(true).wordpress(true)));

        assert!(result.is_err());
    }

    #[test]
    fn builder_failure_is_reported() {
        let mut builder = MockSiteBuilder::new();
        builder.expect_build().returning(|_| {
            Err(ApplicationError::BuilderFailed {
                reason: "disk full".into(),
            }
            .into())
        });

        let service = BuildService::new(Box::new(pages()), Box::new(builder));
        let err = service.build(&ctx(ProjectDescriptor::new("Site"))).unwrap_err();

        assert!(matches!(
            err,
            PressError::Application(ApplicationError::BuilderFailed { .. })
        ));
    }

    #[test]
    fn plan_does_not_build() {
        let mut builder = MockSiteBuilder::new();
        builder.expect_build().times(0);

        let service = BuildService::new(Box::new(pages()), Box::new(builder));
        assert!(service.plan(&ctx(ProjectDescriptor::new("Site"))).is_ok());
    }
}
