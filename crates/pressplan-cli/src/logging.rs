//! Tracing subscriber setup.
//!
//! Only the binary installs a subscriber; `pressplan-core` and
//! `pressplan-adapters` just emit spans and events. Logs always go to stderr
//! so stdout stays clean for manifests and config values.
//!
//! | Flags     | Level |
//! |-----------|-------|
//! | (none)    | warn  |
//! | `-v`      | info  |
//! | `-vv`     | debug |
//! | `-vvv`    | trace |
//! | `--quiet` | error |
//!
//! `RUST_LOG`, when set, replaces the whole filter.

use std::io::IsTerminal as _;

use anyhow::Context as _;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{GlobalArgs, LogFormat};

/// Crates whose events are shown at the chosen level.
const CRATES: [&str; 3] = ["pressplan", "pressplan_core", "pressplan_adapters"];

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(level_for(args))));

    let registry = tracing_subscriber::registry().with(filter);

    let installed = match args.log_format {
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(use_ansi(args.no_color, std::io::stderr().is_terminal()))
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    installed.context("Failed to initialise tracing")
}

fn level_for(args: &GlobalArgs) -> &'static str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn directives(level: &str) -> String {
    CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn use_ansi(no_color: bool, stderr_is_tty: bool) -> bool {
    !no_color && stderr_is_tty
}
