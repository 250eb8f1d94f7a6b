//! `pressplan build`: compute the manifest and hand it to the bundler.
//!
//! The hand-off is a JSON file the bundler configuration reads; it is
//! replaced atomically so a bundler watching it never sees half a manifest.

use std::{io::IsTerminal as _, path::PathBuf, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, instrument};

use pressplan_adapters::{LocalPageSource, ManifestFileBuilder};
use pressplan_core::{
    application::{BuildService, ManifestService},
    domain::{BuildContext, Manifest},
};

use crate::{
    cli::{BuildArgs, OutputFormat, ProjectArgs},
    commands::project,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(args: BuildArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let ctx = project::load_context(&args.project, &config)?;

    if args.stdout {
        let manifest = ManifestService::new(Box::new(LocalPageSource::new())).assemble(&ctx)?;
        output.data(ManifestFileBuilder::render(&manifest)?.trim_end())?;
        return Ok(());
    }

    let handoff = handoff_path(&args.project, args.out.as_ref(), &config)?;
    let spinner = spinner(&output, &ctx);
    let result = run_build(&ctx, &handoff);
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    let manifest = result?;

    report(&manifest, &handoff, &output)
}

/// Absolute hand-off file: `--out`, else `paths.handoff`, under the root.
pub fn handoff_path(
    project: &ProjectArgs,
    out: Option<&PathBuf>,
    config: &AppConfig,
) -> CliResult<PathBuf> {
    let root = project::resolve_root(project)?;
    Ok(root.join(out.unwrap_or(&config.paths.handoff)))
}

/// One full pass: assemble, then write the hand-off file.
pub fn run_build(ctx: &BuildContext, handoff: &std::path::Path) -> CliResult<Manifest> {
    let service = BuildService::new(
        Box::new(LocalPageSource::new()),
        Box::new(ManifestFileBuilder::new(handoff)),
    );
    let manifest = service.build(ctx)?;
    info!(handoff = %handoff.display(), "Manifest handed off");
    Ok(manifest)
}

pub fn report(
    manifest: &Manifest,
    handoff: &std::path::Path,
    output: &OutputManager,
) -> CliResult<()> {
    output.success(&format!(
        "{} artifact(s) planned ({}), manifest written to {}",
        manifest.artifact_count(),
        manifest.plan().mode,
        handoff.display()
    ))?;
    if manifest.artifact_count() == 0 {
        output.warning("No page templates matched; the build will emit no pages")?;
    }
    Ok(())
}

/// Only shown to a person watching stderr in human mode.
fn spinner(output: &OutputManager, ctx: &BuildContext) -> Option<ProgressBar> {
    if output.is_quiet()
        || output.format() != OutputFormat::Human
        || !std::io::stderr().is_terminal()
    {
        return None;
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(format!("Planning {}...", ctx.project_name()));
    pb.enable_steady_tick(Duration::from_millis(80));
    Some(pb)
}
