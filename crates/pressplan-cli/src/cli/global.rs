//! Flags accepted by every subcommand.

use std::path::PathBuf;

use clap::{Args, ValueEnum};

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more: `-v` info, `-vv` debug, `-vvv` trace.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity. Without it only warnings and \
                     errors are logged; -v adds the pass summary, -vv every \
                     excluded template and resolved path, -vvv everything. \
                     Any -v also prints error causes."
    )]
    pub verbose: u8,

    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only print results and errors"
    )]
    pub quiet: bool,

    /// Honours `NO_COLOR` (<https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Used instead of the user-wide and `.pressplan.toml` files; must exist.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How results are printed"
    )]
    pub output_format: OutputFormat,

    /// Log line format on stderr. `json` suits editors and CI that parse logs.
    #[arg(
        long = "log-format",
        global = true,
        value_enum,
        default_value = "text",
        env = "PRESSPLAN_LOG_FORMAT",
        help = "Log format"
    )]
    pub log_format: LogFormat,
}

impl GlobalArgs {
    /// Print the error source chain, not just the top-level message.
    pub fn show_causes(&self) -> bool {
        self.verbose > 0
    }
}

/// How command results are rendered on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human on a terminal, plain when piped.
    #[default]
    Auto,
    Human,
    Plain,
    /// Machine-readable; `plan` prints the manifest itself.
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}
