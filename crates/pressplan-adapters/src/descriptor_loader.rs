//! Project descriptor loading.
//!
//! The descriptor is a JSON document (`config.json` in most projects) or,
//! when the file ends in `.toml`, the same keys in TOML.
//!
//! ```json
//! {
//!   "name": "Acme",
//!   "description": "Starter theme",
//!   "author": "Jo Doe",
//!   "authorUri": "https://example.com",
//!   "logo": "src/assets/img/logo.png",
//!   "apache": false,
//!   "wordpress": true,
//!   "theme": { "version": "1.0.0", "tags": ["blog"] }
//! }
//! ```

use std::{fs, path::Path};

use tracing::{debug, instrument};

use pressplan_core::{
    application::{ApplicationError, ports::DescriptorLoader},
    domain::ProjectDescriptor,
    error::{PressError, PressResult},
};

/// Descriptor file formats, picked by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorFormat {
    Json,
    Toml,
}

impl DescriptorFormat {
    /// `.toml` is TOML; everything else is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

/// Reads descriptors from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileDescriptorLoader;

impl FileDescriptorLoader {
    pub fn new() -> Self {
        Self
    }

    /// Parse a descriptor from text already in memory.
    pub fn parse(
        content: &str,
        format: DescriptorFormat,
        path: &Path,
    ) -> PressResult<ProjectDescriptor> {
        let parsed = match format {
            DescriptorFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            DescriptorFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        };

        parsed.map_err(|reason| load_error(path, reason))
    }
}

impl DescriptorLoader for FileDescriptorLoader {
    #[instrument(skip(self), fields(path = %path.display()))]
    fn load(&self, path: &Path) -> PressResult<ProjectDescriptor> {
        let content = fs::read_to_string(path).map_err(|e| load_error(path, e.to_string()))?;
        let format = DescriptorFormat::from_path(path);
        debug!(?format, "Parsing descriptor");

        Self::parse(&content, format, path)
    }
}

fn load_error(path: &Path, reason: String) -> PressError {
    ApplicationError::DescriptorLoad {
        path: path.to_path_buf(),
        reason,
    }
    .into()
}
