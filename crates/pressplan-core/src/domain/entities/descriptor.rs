use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, value_objects::DeploymentMode};

/// Project-wide settings loaded once at startup.
///
/// Read-only for the whole resolution pass. Key names follow the descriptor
/// document (`authorUri`, `textDomain`, ...), which is why serde renames to
/// camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDescriptor {
    pub name: String,
    pub description: String,
    pub author: String,
    pub author_uri: String,
    pub logo: PathBuf,

    /// Stylesheet header fields, only used when the project is a CMS theme.
    #[serde(default)]
    pub theme: ThemeMetadata,

    /// Passed through untouched to the favicon generator.
    #[serde(default)]
    pub favicon: FaviconOptions,

    #[serde(flatten)]
    pub deployment: DeploymentFlags,
}

/// The two mutually exclusive hosting switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentFlags {
    #[serde(default)]
    pub apache: bool,
    #[serde(default)]
    pub wordpress: bool,
}

impl DeploymentFlags {
    /// Select the deployment mode.
    ///
    /// Fails when both flags are set; this check runs before anything else
    /// looks at the flags.
    pub fn mode(&self) -> Result<DeploymentMode, DomainError> {
        match (self.apache, self.wordpress) {
            (true, true) => Err(DomainError::InvalidDeploymentConfig {
                first: "apache",
                second: "wordpress",
            }),
            (true, false) => Ok(DeploymentMode::ReverseProxyHosted),
            (false, true) => Ok(DeploymentMode::CmsHosted),
            (false, false) => Ok(DeploymentMode::Static),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeMetadata {
    pub uri: Option<String>,
    pub version: Option<String>,
    pub tags: Vec<String>,
    pub license: Option<String>,
    pub text_domain: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FaviconOptions {
    pub app_name: Option<String>,
    pub background: Option<String>,
    pub theme_color: Option<String>,
    pub display: Option<String>,
}

impl ProjectDescriptor {
    /// Create a descriptor with empty metadata and static deployment.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            author: String::new(),
            author_uri: String::new(),
            logo: PathBuf::new(),
            theme: ThemeMetadata::default(),
            favicon: FaviconOptions::default(),
            deployment: DeploymentFlags::default(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn author_uri(mut self, uri: impl Into<String>) -> Self {
        self.author_uri = uri.into();
        self
    }

    pub fn logo(mut self, logo: impl Into<PathBuf>) -> Self {
        self.logo = logo.into();
        self
    }

    pub fn theme(mut self, theme: ThemeMetadata) -> Self {
        self.theme = theme;
        self
    }

    pub fn apache(mut self, enabled: bool) -> Self {
        self.deployment.apache = enabled;
        self
    }

    pub fn wordpress(mut self, enabled: bool) -> Self {
        self.deployment.wordpress = enabled;
        self
    }

    pub fn deployment_mode(&self) -> Result<DeploymentMode, DomainError> {
        self.deployment.mode()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        // Mode first: a conflicting configuration is reported before anything
        // else about the descriptor.
        self.deployment.mode()?;

        if self.name.trim().is_empty() {
            return Err(DomainError::MissingRequiredField { field: "name" });
        }

        Ok(())
    }

    /// Header comment a CMS reads from the theme stylesheet.
    ///
    /// Optional fields are omitted rather than printed empty.
    pub fn stylesheet_banner(&self) -> String {
        let mut lines = vec![format!("    Theme Name: {}", self.name)];

        if let Some(uri) = &self.theme.uri {
            lines.push(format!("    Theme URI: {uri}"));
        }
        lines.push(format!("    Author: {}", self.author));
        lines.push(format!("    Author URI: {}", self.author_uri));
        lines.push(format!("    Description: {}", self.description));
        if let Some(version) = &self.theme.version {
            lines.push(format!("    Version: {version}"));
        }
        if !self.theme.tags.is_empty() {
            lines.push(format!("    Tags: {}", self.theme.tags.join(", ")));
        }
        if let Some(license) = &self.theme.license {
            lines.push(format!("    License: {license}"));
        }
        if let Some(domain) = &self.theme.text_domain {
            lines.push(format!("    Text Domain: {domain}"));
        }

        format!("/*!\n{}\n*/\n", lines.join("\n"))
    }
}
