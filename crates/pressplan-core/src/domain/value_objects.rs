//! Small `Copy` enums shared across the domain, with their wire names and
//! parsers. Lookup tables keyed by them live in `classifier.rs` and
//! `deployment.rs`; a new variant needs an arm in both.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── TemplateCategory ─────────────────────────────────────────────────────────

/// What kind of output a template produces.
///
/// `Unknown` is a real classification, not a failure: files carrying it are
/// left out of the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateCategory {
    /// Handlebars markup rendered to static HTML.
    MarkupTemplate,
    /// PHP page emitted for a server that executes it.
    ServerPage,
    Unknown,
}

impl TemplateCategory {
    /// The categories that can become artifacts.
    pub const RESOLVABLE: [TemplateCategory; 2] = [Self::MarkupTemplate, Self::ServerPage];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MarkupTemplate => "markup-template",
            Self::ServerPage => "server-page",
            Self::Unknown => "unknown",
        }
    }

    pub const fn is_resolvable(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "markup-template" | "markup" | "hbs" => Ok(Self::MarkupTemplate),
            "server-page" | "server" | "php" => Ok(Self::ServerPage),
            other => Err(DomainError::InvalidValue {
                field: "category",
                reason: format!("unknown template category: {other}"),
            }),
        }
    }
}

// ── DeploymentMode ───────────────────────────────────────────────────────────

/// Where the built site lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeploymentMode {
    /// Plain static files in a local build directory.
    Static,
    /// Emitted in place and served by a local web server (Apache-style).
    ReverseProxyHosted,
    /// Emitted as a theme into a CMS installation (WordPress-style).
    CmsHosted,
}

impl DeploymentMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::ReverseProxyHosted => "reverse-proxy-hosted",
            Self::CmsHosted => "cms-hosted",
        }
    }

    /// Whether a running server sits in front of the emitted files.
    pub const fn is_hosted(self) -> bool {
        matches!(self, Self::ReverseProxyHosted | Self::CmsHosted)
    }
}

impl fmt::Display for DeploymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── BuildProfile ─────────────────────────────────────────────────────────────

/// Build/run environment signal.
///
/// Only affects how binary assets are named; templates resolve identically
/// under both profiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildProfile {
    #[default]
    Development,
    Production,
}

impl BuildProfile {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for BuildProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildProfile {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(DomainError::InvalidValue {
                field: "profile",
                reason: format!("unknown build profile: {other}"),
            }),
        }
    }
}
