//! Errors as the `pressplan` binary reports them.
//!
//! [`CliError`] wraps everything a command can fail with. Each variant knows
//! which exit code it maps to and what the user can try next; `main` prints
//! the result through [`CliError::render`].

use std::error::Error;
use std::io;
use std::path::PathBuf;

use owo_colors::{OwoColorize, Style};
use thiserror::Error;

use pressplan_core::error::PressError;

pub use pressplan_core::error::ErrorCategory as CoreCategory;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Input the user can fix: a bad prompt answer, an unusable value.
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<Box<dyn Error + Send + Sync>>,
    },

    /// `--root` (or the working directory) could not be resolved.
    #[error("Project root not found: {}", .path.display())]
    ProjectRootNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading, layering, or serialising `AppConfig` failed.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn Error + Send + Sync>>,
    },

    /// Planning or building failed inside `pressplan-core`.
    #[error(transparent)]
    Core(#[from] PressError),

    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: io::Error,
    },

    /// The user declined a confirmation prompt.
    #[error("Operation cancelled")]
    Cancelled,
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Next steps printed under the error message.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message, .. } => vec![
                format!("Fix the value and retry: {message}"),
                "See `pressplan <command> --help` for accepted values".into(),
            ],

            Self::ProjectRootNotFound { path, .. } => vec![
                format!("'{}' does not exist", path.display()),
                "Pass the project directory with --root".into(),
            ],

            Self::ConfigError { .. } => vec![
                format!(
                    "Inspect {} and any .pressplan.toml in the working directory",
                    crate::config::AppConfig::config_path().display()
                ),
                "PRESSPLAN__<SECTION>__<KEY> variables override the files".into(),
                "`pressplan init --force` writes a fresh default".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { .. } => vec![
                "Make sure the target directory exists and is writable".into(),
            ],

            Self::Cancelled => vec!["Nothing was written".into()],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } | Self::Cancelled => ErrorCategory::UserError,
            Self::ProjectRootNotFound { .. } => ErrorCategory::NotFound,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation | CoreCategory::Conflict => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// 2 for user errors, 3 for missing inputs, 4 for configuration, 1 for
    /// everything else.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Message, cause chain (when asked for), suggestions, and a hint to
    /// re-run with `-v` when there is a hidden cause.
    pub fn render(&self, show_causes: bool, colour: bool) -> String {
        let paint = |text: &str, style: Style| {
            if colour {
                text.style(style).to_string()
            } else {
                text.to_owned()
            }
        };

        let mut out = format!(
            "\n{} {}\n",
            paint("\u{2717} Error:", Style::new().red().bold()), // ✗
            paint(&self.to_string(), Style::new().red()),
        );

        if show_causes {
            let mut source = self.source();
            while let Some(err) = source {
                out.push_str(&format!(
                    "  {} {err}\n",
                    paint("caused by:", Style::new().dimmed())
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str(&format!(
                "\n{}\n",
                paint("Suggestions:", Style::new().yellow().bold())
            ));
            for suggestion in &suggestions {
                out.push_str(&format!("  \u{2022} {suggestion}\n"));
            }
        }

        if !show_causes && self.source().is_some() {
            out.push_str(&format!(
                "\n{}\n",
                paint("Run with -v to see the underlying cause.", Style::new().dimmed())
            ));
        }

        out
    }

    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(exit_code = self.exit_code(), "{self}")
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(exit_code = self.exit_code(), "{self}")
            }
        }

        if let Some(source) = self.source() {
            tracing::debug!(%source, "underlying cause");
        }
    }
}

/// How a [`CliError`] is presented and which exit code it gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserError,
    NotFound,
    Configuration,
    Internal,
}

/// Attach a message to a failed filesystem call.
pub trait IoResultExt<T> {
    fn io_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn io_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pressplan_core::{application::ApplicationError, domain::DomainError};

    fn core(err: impl Into<PressError>) -> CliError {
        CliError::Core(err.into())
    }

    // ── suggestions ───────────────────────────────────────────────────────

    #[test]
    fn conflicting_flags_suggest_both_flags() {
        let err = core(DomainError::InvalidDeploymentConfig {
            first: "apache",
            second: "wordpress",
        });
        let suggestions = err.suggestions();
        assert!(suggestions.iter().any(|s| s.contains("apache")));
        assert!(suggestions.iter().any(|s| s.contains("wordpress")));
    }

    #[test]
    fn missing_pages_dir_suggests_pages_flag() {
        let err = core(ApplicationError::PagesDirMissing {
            path: PathBuf::from("/site/src/pages"),
        });
        assert!(err.suggestions().iter().any(|s| s.contains("--pages")));
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn exit_code_user_error() {
        assert_eq!(
            CliError::InvalidInput {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            2
        );
        assert_eq!(
            core(DomainError::DuplicateArtifact {
                output: "index.html".into(),
                first: "a.hbs".into(),
                second: "a.php".into(),
            })
            .exit_code(),
            2
        );
    }

    #[test]
    fn exit_code_not_found() {
        assert_eq!(
            core(ApplicationError::PagesDirMissing {
                path: PathBuf::from("/x")
            })
            .exit_code(),
            3
        );
    }

    #[test]
    fn exit_code_configuration() {
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
        assert_eq!(
            core(ApplicationError::DescriptorLoad {
                path: PathBuf::from("config.json"),
                reason: "missing field `name`".into(),
            })
            .exit_code(),
            4
        );
    }

    #[test]
    fn exit_code_internal() {
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            1
        );
    }

    // ── render ────────────────────────────────────────────────────────────

    #[test]
    fn render_lists_message_and_suggestions() {
        let err = core(ApplicationError::PagesDirMissing {
            path: PathBuf::from("/tmp/x"),
        });
        let s = err.render(false, false);
        assert!(s.contains("Error: Pages directory not found: /tmp/x"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("mkdir -p /tmp/x"));
        // No source, so no hint.
        assert!(!s.contains("-v"));
    }

    #[test]
    fn render_hides_causes_unless_asked() {
        let err = CliError::IoError {
            message: "writing manifest".into(),
            source: io::Error::other("disk full"),
        };

        let terse = err.render(false, false);
        assert!(!terse.contains("disk full"));
        assert!(terse.contains("Run with -v"));

        let full = err.render(true, false);
        assert!(full.contains("caused by: disk full"));
        assert!(!full.contains("Run with -v"));
    }

    #[test]
    fn render_without_colour_has_no_escapes() {
        let err = CliError::Cancelled;
        assert!(!err.render(false, false).contains('\u{1b}'));
        assert!(err.render(false, true).contains('\u{1b}'));
    }

    // ── io_context ────────────────────────────────────────────────────────

    #[test]
    fn io_context_keeps_message_and_source() {
        let result: io::Result<()> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        match result.io_context(|| "reading config") {
            Err(CliError::IoError { message, source }) => {
                assert_eq!(message, "reading config");
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected IoError, got {other:?}"),
        }
    }
}
