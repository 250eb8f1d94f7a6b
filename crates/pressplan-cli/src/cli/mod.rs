//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use pressplan_core::domain::BuildProfile;

pub mod global;
pub use global::{GlobalArgs, LogFormat, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "pressplan",
    bin_name = "pressplan",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Plan static-site and theme builds from a folder of page templates",
    long_about = "Pressplan discovers page templates, decides what each one becomes, \
                  and works out where the build goes and how the dev server proxies it: \
                  a plain static site, an Apache-hosted PHP site, or a WordPress theme.",
    after_help = "EXAMPLES:\n\
        \x20 pressplan plan\n\
        \x20 pressplan plan --output-format json\n\
        \x20 pressplan build --profile production\n\
        \x20 pressplan watch\n\
        \x20 pressplan completions bash > /usr/share/bash-completion/completions/pressplan",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute and print the build manifest.
    #[command(
        visible_alias = "p",
        about = "Print the build manifest",
        after_help = "EXAMPLES:\n\
            \x20 pressplan plan\n\
            \x20 pressplan plan --root ../my-site --pages templates\n\
            \x20 pressplan plan --output-format json > manifest.json"
    )]
    Plan(PlanArgs),

    /// Compute the manifest and hand it to the site builder.
    #[command(
        visible_alias = "b",
        about = "Write the manifest for the bundler",
        after_help = "EXAMPLES:\n\
            \x20 pressplan build\n\
            \x20 pressplan build --profile production\n\
            \x20 pressplan build --stdout | jq .plan"
    )]
    Build(BuildArgs),

    /// Rebuild whenever the pages or the descriptor change.
    #[command(
        visible_alias = "w",
        about = "Rebuild on change",
        after_help = "EXAMPLES:\n\
            \x20 pressplan watch\n\
            \x20 pressplan watch --debounce 500 --clear"
    )]
    Watch(WatchArgs),

    /// Print the WordPress stylesheet header for the project.
    #[command(
        about = "Print the theme stylesheet header",
        after_help = "EXAMPLES:\n\
            \x20 pressplan theme-header > src/style-header.css"
    )]
    ThemeHeader(ProjectArgs),

    /// Initialise a Pressplan configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 pressplan init           # .pressplan.toml in the current directory\n\
            \x20 pressplan init --global  # user-wide config"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 pressplan completions bash > ~/.local/share/bash-completion/completions/pressplan\n\
            \x20 pressplan completions zsh  > ~/.zfunc/_pressplan\n\
            \x20 pressplan completions fish > ~/.config/fish/completions/pressplan.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Pressplan configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 pressplan config get hosting.dev_port\n\
            \x20 pressplan config list\n\
            \x20 pressplan config path"
    )]
    Config(ConfigCommands),
}

impl Commands {
    /// Subcommand name as typed, for log spans.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Plan(_) => "plan",
            Self::Build(_) => "build",
            Self::Watch(_) => "watch",
            Self::ThemeHeader(_) => "theme-header",
            Self::Init(_) => "init",
            Self::Completions(_) => "completions",
            Self::Config(_) => "config",
        }
    }

    /// Directory whose `.pressplan.toml` applies: `--root` for commands that
    /// take a project, otherwise the working directory (empty path).
    pub fn project_dir(&self) -> PathBuf {
        let root = match self {
            Self::Plan(args) => args.project.root.as_ref(),
            Self::Build(args) => args.project.root.as_ref(),
            Self::Watch(args) => args.project.root.as_ref(),
            Self::ThemeHeader(project) => project.root.as_ref(),
            Self::Init(_) | Self::Completions(_) | Self::Config(_) => None,
        };
        root.cloned().unwrap_or_default()
    }
}

// ── shared project selection ──────────────────────────────────────────────────

/// Which project to resolve. Anything left out comes from the config file.
#[derive(Debug, Clone, Args)]
pub struct ProjectArgs {
    /// Project root; its directory name is the project name.
    #[arg(
        short = 'r',
        long = "root",
        value_name = "DIR",
        help = "Project root (default: current directory)"
    )]
    pub root: Option<PathBuf>,

    /// Project descriptor, relative to the root.
    #[arg(
        short = 'd',
        long = "descriptor",
        value_name = "FILE",
        help = "Project descriptor, JSON or TOML (default: config.json)"
    )]
    pub descriptor: Option<PathBuf>,

    /// Pages directory, relative to the root.
    #[arg(
        long = "pages",
        value_name = "DIR",
        help = "Page templates directory (default: src/pages)"
    )]
    pub pages: Option<PathBuf>,

    /// Build profile.
    #[arg(
        long = "profile",
        value_enum,
        env = "PRESSPLAN_PROFILE",
        help = "Build profile"
    )]
    pub profile: Option<Profile>,
}

// ── plan ──────────────────────────────────────────────────────────────────────

/// Arguments for `pressplan plan`.
#[derive(Debug, Args)]
pub struct PlanArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}

// ── build ─────────────────────────────────────────────────────────────────────

/// Arguments for `pressplan build`.
#[derive(Debug, Args)]
pub struct BuildArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Where to write the manifest, relative to the root.
    #[arg(
        short = 'o',
        long = "out",
        value_name = "FILE",
        conflicts_with = "stdout",
        help = "Hand-off file (default: .pressplan/manifest.json)"
    )]
    pub out: Option<PathBuf>,

    /// Print the hand-off JSON instead of writing it.
    #[arg(long = "stdout", help = "Print the manifest instead of writing it")]
    pub stdout: bool,
}

// ── watch ─────────────────────────────────────────────────────────────────────

/// Arguments for `pressplan watch`.
#[derive(Debug, Args)]
pub struct WatchArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Where to write the manifest, relative to the root.
    #[arg(
        short = 'o',
        long = "out",
        value_name = "FILE",
        help = "Hand-off file (default: .pressplan/manifest.json)"
    )]
    pub out: Option<PathBuf>,

    /// Quiet period before a burst of changes triggers a rebuild.
    #[arg(
        long = "debounce",
        value_name = "MS",
        default_value_t = 200,
        help = "Debounce window in milliseconds"
    )]
    pub debounce: u64,

    /// Clear the terminal before each rebuild.
    #[arg(long = "clear", help = "Clear the screen before each rebuild")]
    pub clear: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `pressplan init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to the user-wide config location instead of the current
    /// directory.
    #[arg(long = "global", help = "Create global configuration")]
    pub global: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `pressplan completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `pressplan config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `hosting.dev_port`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Build profiles as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Profile {
    /// Also accepted as `dev`.
    #[value(alias = "dev")]
    Development,
    /// Also accepted as `prod`.
    #[value(alias = "prod")]
    Production,
}

impl From<Profile> for BuildProfile {
    fn from(profile: Profile) -> Self {
        match profile {
            Profile::Development => BuildProfile::Development,
            Profile::Production => BuildProfile::Production,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_plan_command() {
        let cli = Cli::parse_from(["pressplan", "plan", "--root", "/srv/www/site"]);
        match cli.command {
            Commands::Plan(args) => {
                assert_eq!(args.project.root, Some(PathBuf::from("/srv/www/site")));
                assert!(args.project.descriptor.is_none());
            }
            other => panic!("expected Plan, got {other:?}"),
        }
    }

    #[test]
    fn profile_aliases() {
        let cli = Cli::parse_from(["pressplan", "build", "--profile", "prod"]);
        if let Commands::Build(args) = cli.command {
            assert_eq!(args.project.profile, Some(Profile::Production));
            assert_eq!(
                BuildProfile::from(Profile::Production),
                BuildProfile::Production
            );
        } else {
            panic!("expected Build command");
        }
    }

    #[test]
    fn build_out_conflicts_with_stdout() {
        let result =
            Cli::try_parse_from(["pressplan", "build", "--stdout", "--out", "manifest.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn watch_defaults() {
        let cli = Cli::parse_from(["pressplan", "watch"]);
        if let Commands::Watch(args) = cli.command {
            assert_eq!(args.debounce, 200);
            assert!(!args.clear);
        } else {
            panic!("expected Watch command");
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["pressplan", "plan", "-vv", "--output-format", "json"]);
        assert_eq!(cli.global.verbose, 2);
        assert_eq!(cli.global.output_format, OutputFormat::Json);
    }

    #[test]
    fn project_dir_follows_root() {
        let cli = Cli::parse_from(["pressplan", "plan", "--root", "../site"]);
        assert_eq!(cli.command.project_dir(), PathBuf::from("../site"));

        let cli = Cli::parse_from(["pressplan", "config", "path"]);
        assert_eq!(cli.command.project_dir(), PathBuf::new());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["pressplan", "--quiet", "--verbose", "plan"]);
        assert!(result.is_err());
    }
}
