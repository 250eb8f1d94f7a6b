//! Everything the commands print to stdout goes through [`OutputManager`].
//!
//! Payloads (`data`) always print. Status lines are dropped under `--quiet`,
//! except errors.

use std::io::{self, IsTerminal};

use clap::ValueEnum;
use console::Term;
use owo_colors::{OwoColorize, Style};

use crate::cli::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // The flag wins over `output.format`; Auto resolves to Human on a
        // terminal and Plain otherwise.
        let requested = match args.output_format {
            OutputFormat::Auto => {
                <OutputFormat as ValueEnum>::from_str(&config.output.format, true)
                    .unwrap_or(OutputFormat::Auto)
            }
            explicit => explicit,
        };
        let resolved_format = match requested {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
            term: Term::stdout(),
        }
    }

    /// Command payload: manifest JSON, banners, config values.
    pub fn data(&self, text: &str) -> io::Result<()> {
        self.term.write_line(text)
    }

    /// Indented secondary line.
    pub fn detail(&self, text: &str) -> io::Result<()> {
        let line = self.decorate("", text, Style::new().dimmed());
        self.status(&line, false)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        let line = self.decorate("\u{2713}", msg, Style::new().green()); // ✓
        self.status(&line, false)
    }

    /// Printed even under `--quiet`.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        let line = self.decorate("\u{2717}", msg, Style::new().red()); // ✗
        self.status(&line, true)
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        let line = self.decorate("\u{26a0}", msg, Style::new().yellow()); // ⚠
        self.status(&line, false)
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        let line = self.decorate("\u{2139}", msg, Style::new().blue()); // ℹ
        self.status(&line, false)
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.status(&line, false)
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// The resolved format; never `Auto`.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }

    fn status(&self, line: &str, always: bool) -> io::Result<()> {
        if self.quiet && !always {
            return Ok(());
        }
        self.term.write_line(line)
    }

    /// `<symbol> <msg>`, or `  <msg>` without a symbol.
    fn decorate(&self, symbol: &str, msg: &str, style: Style) -> String {
        let prefix = if symbol.is_empty() { " " } else { symbol };
        if self.no_color {
            format!("{prefix} {msg}")
        } else {
            format!("{} {}", prefix.style(style.bold()), msg.style(style))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::LogFormat;

    fn args(format: OutputFormat, quiet: bool, no_color: bool) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format: format,
            log_format: LogFormat::Text,
        }
    }

    fn manager(quiet: bool, no_color: bool) -> OutputManager {
        // Plain avoids TTY detection.
        OutputManager::new(&args(OutputFormat::Plain, quiet, no_color), &AppConfig::default())
    }

    #[test]
    fn quiet_mode_still_writes_data_and_errors() {
        let out = manager(true, true);
        assert!(out.is_quiet());
        assert!(out.data("{}").is_ok());
        assert!(out.error("something went wrong").is_ok());
        assert!(out.info("skipped").is_ok());
    }

    #[test]
    fn plain_decoration_has_no_escape_codes() {
        let out = manager(false, true);
        assert_eq!(out.decorate("\u{2713}", "done", Style::new().green()), "\u{2713} done");
        assert_eq!(out.decorate("", "took 3ms", Style::new().dimmed()), "  took 3ms");
    }

    #[test]
    fn coloured_decoration_wraps_the_message() {
        let out = manager(false, false);
        let line = out.decorate("\u{2717}", "broken", Style::new().red());
        assert!(line.contains("broken"));
        assert!(line.contains('\u{1b}'));
    }

    #[test]
    fn config_colour_setting_applies() {
        let mut config = AppConfig::default();
        config.output.no_color = true;
        let out = OutputManager::new(&args(OutputFormat::Plain, false, false), &config);
        assert_eq!(out.decorate("!", "x", Style::new()), "! x");
    }

    #[test]
    fn config_format_applies_when_flag_is_auto() {
        let mut config = AppConfig::default();
        config.output.format = "json".into();

        let out = OutputManager::new(&args(OutputFormat::Auto, false, true), &config);
        assert_eq!(out.format(), OutputFormat::Json);
    }

    #[test]
    fn flag_beats_config_format() {
        let mut config = AppConfig::default();
        config.output.format = "json".into();

        let out = OutputManager::new(&args(OutputFormat::Plain, false, true), &config);
        assert_eq!(out.format(), OutputFormat::Plain);
    }
}
