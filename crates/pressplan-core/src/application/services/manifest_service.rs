//! Manifest Service - the one aggregation point of a resolution pass.
//!
//! This service coordinates the whole pass:
//! 1. Validate the descriptor and resolve the deployment plan
//! 2. Discover templates through the `PageSource` port
//! 3. Classify, drop `Unknown`, resolve one artifact per template
//! 4. Assemble the manifest (duplicate outputs are rejected here)
//!
//! Nothing is written; the manifest is returned whole or not at all.

use tracing::{debug, info, instrument};

use crate::{
    application::ports::PageSource,
    domain::{
        AssetNaming, BuildContext, DeploymentMode, DomainValidator as validator, Manifest,
        resolve_artifact, resolve_deployment,
    },
    error::{PressError, PressResult},
};

/// Assembles build manifests.
pub struct ManifestService {
    pages: Box<dyn PageSource>,
}

impl ManifestService {
    pub fn new(pages: Box<dyn PageSource>) -> Self {
        Self { pages }
    }

    /// Run one full resolution pass for `ctx`.
    ///
    /// Invalid deployment flags fail before the pages directory is touched.
    #[instrument(
        skip_all,
        fields(
            project = %ctx.project_name(),
            pages = %ctx.pages_dir().display(),
            profile = %ctx.profile()
        )
    )]
    pub fn assemble(&self, ctx: &BuildContext) -> PressResult<Manifest> {
        // 1. Validate and resolve the deployment before any I/O
        validator::validate_context(ctx).map_err(PressError::Domain)?;
        let plan = resolve_deployment(ctx)?;
        let classifier = ctx.classifier()?;
        debug!(mode = %plan.mode, output_root = %plan.output_root.display(), "Deployment resolved");

        // 2. Discover
        let files = self.pages.discover(ctx.pages_dir())?;
        debug!(count = files.len(), "Templates discovered");

        // 3. Classify and resolve, in discovery order
        let (resolvable, excluded) = classifier.partition(&files);
        for file in &excluded {
            debug!(file = %file, "Excluded: not a template for this run");
        }

        let artifacts = resolvable
            .into_iter()
            .map(|(file, category)| {
                resolve_artifact(file, category, ctx.descriptor(), ctx.extensions())
            })
            .collect::<Result<Vec<_>, _>>()?;

        // 4. Assemble
        let mut manifest = Manifest::new(artifacts, plan, AssetNaming::for_profile(ctx.profile()))?;
        if manifest.plan().mode == DeploymentMode::CmsHosted {
            manifest = manifest.with_stylesheet_banner(ctx.descriptor().stylesheet_banner());
        }

        info!(
            artifacts = manifest.artifact_count(),
            excluded = excluded.len(),
            mode = %manifest.plan().mode,
            "Manifest assembled"
        );
        Ok(manifest)
    }
}
