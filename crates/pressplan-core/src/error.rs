//! The error every core entry point returns.
//!
//! Domain rules and application plumbing fail in different ways, but callers
//! only need one type: [`PressError`] keeps the original error intact and
//! folds both layers onto one [`ErrorCategory`] scale.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{self, DomainError};

#[derive(Debug, Error, Clone)]
pub enum PressError {
    /// A descriptor, context, or manifest broke a domain rule.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Discovery, descriptor loading, or the site builder failed.
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl PressError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                domain::ErrorCategory::Validation => ErrorCategory::Validation,
                domain::ErrorCategory::Conflict => ErrorCategory::Conflict,
                domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Coarse failure kinds; the CLI maps these to exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    Configuration,
    Internal,
}

pub type PressResult<T> = Result<T, PressError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_category_is_preserved() {
        let err: PressError = DomainError::InvalidDeploymentConfig {
            first: "apache",
            second: "wordpress",
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.to_string().contains("apache"));
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn missing_pages_dir_is_not_found() {
        let err: PressError = ApplicationError::PagesDirMissing {
            path: "/nope".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.suggestions().iter().any(|s| s.contains("/nope")));
    }

    #[test]
    fn descriptor_load_is_configuration() {
        let err: PressError = ApplicationError::DescriptorLoad {
            path: "config.json".into(),
            reason: "expected value at line 1".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.to_string().contains("config.json"));
    }
}
