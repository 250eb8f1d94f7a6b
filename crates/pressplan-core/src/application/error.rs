//! Failures outside the domain rules: I/O behind the ports, the watcher,
//! shared adapter state.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The pages directory does not exist or is not a directory.
    #[error("Pages directory not found: {}", .path.display())]
    PagesDirMissing { path: PathBuf },

    /// Listing the pages directory failed.
    #[error("Failed to list pages in {}: {reason}", .path.display())]
    Discovery { path: PathBuf, reason: String },

    /// The project descriptor could not be read or parsed.
    #[error("Failed to load project descriptor {}: {reason}", .path.display())]
    DescriptorLoad { path: PathBuf, reason: String },

    /// The site builder rejected or failed to take the manifest.
    #[error("Site builder failed: {reason}")]
    BuilderFailed { reason: String },

    /// A shared in-memory adapter was poisoned by a panicking thread.
    #[error("Adapter state lock poisoned")]
    LockPoisoned,

    /// Filesystem watching failed.
    #[error("Watch failed: {reason}")]
    Watch { reason: String },
}

impl ApplicationError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::PagesDirMissing { path } => vec![
                format!("Create the directory: mkdir -p {}", path.display()),
                "Or point at another one with --pages".into(),
                "Or set paths.pages_dir in .pressplan.toml".into(),
            ],
            Self::Discovery { path, .. } => vec![
                format!("Check that {} is readable", path.display()),
            ],
            Self::DescriptorLoad { path, .. } => vec![
                format!("Check that {} exists and is valid JSON or TOML", path.display()),
                "Use --descriptor to point at another file".into(),
            ],
            Self::BuilderFailed { .. } => vec![
                "Check that the hand-off location is writable".into(),
                "Run 'pressplan plan' to inspect the manifest without building".into(),
            ],
            Self::Watch { .. } => vec![
                "Check that the watched paths still exist".into(),
                "On Linux, you may need to raise fs.inotify.max_user_watches".into(),
            ],
            Self::LockPoisoned => vec!["A previous step panicked; re-run with -vv for details".into()],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::PagesDirMissing { .. } => ErrorCategory::NotFound,
            Self::DescriptorLoad { .. } => ErrorCategory::Configuration,
            Self::Discovery { .. }
            | Self::BuilderFailed { .. }
            | Self::LockPoisoned
            | Self::Watch { .. } => ErrorCategory::Internal,
        }
    }
}
