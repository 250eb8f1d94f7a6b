//! `pressplan theme-header`: print the stylesheet header a CMS reads.

use tracing::instrument;

use pressplan_core::{domain::DeploymentMode, error::PressError};

use crate::{
    cli::ProjectArgs,
    commands::project,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(args: ProjectArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let ctx = project::load_context(&args, &config)?;
    let descriptor = ctx.descriptor();
    descriptor.validate().map_err(PressError::from)?;

    if descriptor.deployment_mode().map_err(PressError::from)? != DeploymentMode::CmsHosted {
        output.warning("Project is not a WordPress theme; the header is only used by themes")?;
    }

    output.data(descriptor.stylesheet_banner().trim_end())?;
    Ok(())
}
