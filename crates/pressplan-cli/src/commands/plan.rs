//! `pressplan plan`: compute the manifest and print it.

use tracing::instrument;

use pressplan_adapters::{LocalPageSource, ManifestFileBuilder};
use pressplan_core::{application::ManifestService, domain::Manifest};

use crate::{
    cli::{OutputFormat, PlanArgs},
    commands::project,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(args: PlanArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let ctx = project::load_context(&args.project, &config)?;
    let manifest = ManifestService::new(Box::new(LocalPageSource::new())).assemble(&ctx)?;

    if output.format() == OutputFormat::Json {
        let json = ManifestFileBuilder::render(&manifest)?;
        output.data(json.trim_end())?;
    } else {
        print_summary(&manifest, &output)?;
    }

    Ok(())
}

/// Human-readable manifest summary. Shared with `watch`.
pub fn print_summary(manifest: &Manifest, output: &OutputManager) -> CliResult<()> {
    let plan = manifest.plan();

    output.header(&format!(
        "{} artifact(s), {} ({})",
        manifest.artifact_count(),
        plan.mode,
        manifest.asset_naming().profile
    ))?;

    for artifact in manifest.artifacts() {
        let source = artifact
            .source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| artifact.source.display().to_string());
        output.data(&format!(
            "  {source} → {} [{}]",
            artifact.output_filename, artifact.category
        ))?;
    }

    output.detail(&format!("output root: {}", plan.output_root.display()))?;
    output.detail(&format!("public path: {}", plan.public_path))?;
    if let Some(target) = plan.proxy_target() {
        output.detail(&format!("dev proxy:   {target}"))?;
    }
    output.detail(&format!("dev port:    {}", plan.dev_server.port))?;
    output.detail(&format!("assets:      {}", manifest.asset_naming().pattern))?;

    Ok(())
}
