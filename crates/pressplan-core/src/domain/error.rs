use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::TemplateCategory;

/// A broken resolution rule. Cloneable so a watcher can keep the last
/// failure around.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // -- descriptor --
    #[error(
        "conflicting deployment flags: '{first}' and '{second}' are both enabled, \
         at most one deployment mode may be selected"
    )]
    InvalidDeploymentConfig {
        first: &'static str,
        second: &'static str,
    },

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },

    // -- resolution --
    #[error(
        "output '{output}' is produced by two templates: {} and {}",
        .first.display(),
        .second.display()
    )]
    DuplicateArtifact {
        output: String,
        first: PathBuf,
        second: PathBuf,
    },

    // -- invariants --
    #[error("cannot resolve an artifact for {} (category '{category}')", .path.display())]
    UnsupportedCategory {
        path: PathBuf,
        category: TemplateCategory,
    },
}

impl DomainError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidDeploymentConfig { first, second } => vec![
                format!("Set either '{first}' or '{second}' to false in the project descriptor"),
                format!("'{first}: true' hosts the site in place behind a reverse proxy"),
                format!("'{second}: true' emits a theme into the CMS themes directory"),
                "Leave both false for a plain static build".into(),
            ],
            Self::DuplicateArtifact {
                output,
                first,
                second,
            } => vec![
                format!("Both {} and {} resolve to '{output}'", first.display(), second.display()),
                "Rename one of the templates".into(),
                "Or give each category a distinct output extension in the [naming] config".into(),
            ],
            Self::MissingRequiredField { field } => vec![
                format!("Add '{field}' to the project descriptor"),
            ],
            Self::InvalidValue { field, reason } => vec![
                format!("Fix the value of '{field}': {reason}"),
            ],
            Self::UnsupportedCategory { .. } => vec![
                "Unknown templates must be filtered before naming".into(),
                "This is a bug, please report it".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidDeploymentConfig { .. }
            | Self::MissingRequiredField { .. }
            | Self::InvalidValue { .. } => ErrorCategory::Validation,
            Self::DuplicateArtifact { .. } => ErrorCategory::Conflict,
            Self::UnsupportedCategory { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    Internal,
}
