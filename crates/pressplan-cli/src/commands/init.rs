//! `pressplan init`: write a default configuration file.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliError, CliResult, IoResultExt},
    output::OutputManager,
};

/// Write the defaults to `.pressplan.toml`, or to the user-wide file with
/// `--global`.
pub fn execute(args: InitArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let config_path = if args.global {
        AppConfig::config_path()
    } else {
        PathBuf::from(LOCAL_CONFIG_FILE)
    };

    if config_path.exists() && !args.force && !confirm_overwrite(&config_path, &global)? {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    write_default(&config_path)?;
    info!(path = %config_path.display(), "Configuration written");

    output.success(&format!("Configuration created at {}", config_path.display()))?;
    Ok(())
}

fn write_default(path: &Path) -> CliResult<()> {
    let toml = toml::to_string_pretty(&AppConfig::default()).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise default config: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).io_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(path, toml)
        .io_context(|| format!("Failed to write config to '{}'", path.display()))
}

/// Ask before clobbering an existing file. Without a terminal the answer is
/// always no.
#[cfg(feature = "interactive")]
fn confirm_overwrite(path: &Path, global: &GlobalArgs) -> CliResult<bool> {
    use std::io::IsTerminal as _;

    if global.quiet || !std::io::stdin().is_terminal() {
        return Ok(false);
    }

    use dialoguer::Confirm;
    let confirmed = Confirm::new()
        .with_prompt(format!("{} exists. Overwrite?", path.display()))
        .default(false)
        .interact()
        .map_err(|e| CliError::InvalidInput {
            message: format!("Prompt failed: {e}"),
            source: Some(Box::new(e)),
        })?;

    if confirmed {
        Ok(true)
    } else {
        Err(CliError::Cancelled)
    }
}

#[cfg(not(feature = "interactive"))]
fn confirm_overwrite(_path: &Path, _global: &GlobalArgs) -> CliResult<bool> {
    Ok(false)
}
