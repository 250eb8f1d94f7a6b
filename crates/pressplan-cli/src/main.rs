//! # pressplan
//!
//! Works out what a folder of page templates builds into and where it goes:
//! a static site, an Apache-hosted PHP site, or a WordPress theme.
//!
//! `main` parses arguments, installs logging, loads [`AppConfig`], runs one
//! command, and turns any [`CliError`] into a message on stderr. Exit codes:
//! 0 on success, 2 when the input needs fixing, 3 when a path is missing,
//! 4 for a broken configuration or descriptor, 1 for anything else.

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // A missing .env is normal.
    let _ = dotenvy::dotenv();

    // `--help` / `--version` print to stdout and exit 0; parse failures go
    // to stderr with exit 2.
    let cli = Cli::try_parse().unwrap_or_else(|e| e.exit());

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("{e:#}");
        return ExitCode::from(1);
    }

    let show_causes = cli.global.show_causes();
    let colour = !cli.global.no_color && std::io::stderr().is_terminal();

    let result = AppConfig::load(cli.global.config.as_ref(), &cli.command.project_dir())
        .map_err(|e| CliError::ConfigError {
            message: format!("{e:#}"),
            source: None,
        })
        .and_then(|config| run(cli, config));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err, show_causes, colour),
    }
}

#[instrument(skip_all, fields(command = cli.command.name()))]
fn run(cli: Cli, config: AppConfig) -> CliResult<()> {
    let output = OutputManager::new(&cli.global, &config);
    debug!(format = ?output.format(), quiet = output.is_quiet(), "Dispatching");

    match cli.command {
        Commands::Plan(args) => commands::plan::execute(args, config, output),
        Commands::Build(args) => commands::build::execute(args, config, output),
        Commands::Watch(args) => commands::watch::execute(args, config, output),
        Commands::ThemeHeader(args) => commands::theme_header::execute(args, config, output),
        Commands::Init(args) => commands::init::execute(args, cli.global, output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(cmd) => commands::config::execute(cmd, cli.global, config, output),
    }
}

/// Log the error, print it to stderr, and pick the exit code.
fn report(err: &CliError, show_causes: bool, colour: bool) -> ExitCode {
    err.log();

    eprint!("{}", err.render(show_causes, colour));

    ExitCode::from(err.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_version_matches_cargo() {
        assert_eq!(Cli::command().get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn every_subcommand_shows_examples() {
        for sub in Cli::command().get_subcommands().filter(|s| s.get_name() != "help") {
            let help = sub.get_after_help().map(|h| h.to_string()).unwrap_or_default();
            assert!(help.contains("EXAMPLES"), "{} has no examples", sub.get_name());
        }
    }
}
