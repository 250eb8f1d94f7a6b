//! Turns `ProjectArgs` plus config into a core `BuildContext`.

use std::path::{Path, PathBuf};

use tracing::debug;

use pressplan_adapters::FileDescriptorLoader;
use pressplan_core::{application::DescriptorLoader, domain::BuildContext};

use crate::{
    cli::ProjectArgs,
    config::AppConfig,
    error::{CliError, CliResult},
};

/// Absolute project root: `--root`, else the working directory.
pub fn resolve_root(args: &ProjectArgs) -> CliResult<PathBuf> {
    let root = args.root.clone().unwrap_or_else(|| PathBuf::from("."));
    root.canonicalize()
        .map_err(|source| CliError::ProjectRootNotFound { path: root, source })
}

/// Descriptor path under `root`.
pub fn descriptor_path(args: &ProjectArgs, config: &AppConfig, root: &Path) -> PathBuf {
    root.join(args.descriptor.as_ref().unwrap_or(&config.paths.descriptor))
}

/// Pages directory under `root`.
pub fn pages_dir(args: &ProjectArgs, config: &AppConfig, root: &Path) -> PathBuf {
    root.join(args.pages.as_ref().unwrap_or(&config.paths.pages_dir))
}

/// Load the descriptor and build a context. Flags beat config.
pub fn load_context(args: &ProjectArgs, config: &AppConfig) -> CliResult<BuildContext> {
    let root = resolve_root(args)?;
    let descriptor_file = descriptor_path(args, config, &root);
    debug!(root = %root.display(), descriptor = %descriptor_file.display(), "Loading project");

    let descriptor = FileDescriptorLoader::new().load(&descriptor_file)?;

    let categories = config.categories().map_err(|message| CliError::ConfigError {
        message: format!("naming.categories: {message}"),
        source: None,
    })?;

    let mut ctx = BuildContext::new(descriptor, &root)
        .map_err(pressplan_core::error::PressError::from)?
        .with_pages_dir(pages_dir(args, config, &root))
        .with_extensions(config.output_extensions())
        .with_hosting(config.hosting.clone());

    if let Some(profile) = args.profile {
        ctx = ctx.with_profile(profile.into());
    }
    if let Some(categories) = categories {
        ctx = ctx.with_categories(categories);
    }

    Ok(ctx)
}
