use std::path::PathBuf;

use serde::Serialize;

use crate::domain::value_objects::TemplateCategory;

/// One output file the site builder must emit.
///
/// This is the output of artifact name resolution. It contains no business
/// logic, only data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub output_filename: String,
    pub source: PathBuf,
    pub category: TemplateCategory,
    pub metadata: ArtifactMetadata,
}

/// Page-level metadata injected by the builder's HTML stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactMetadata {
    pub title: String,
    pub description: String,
    pub author: String,
}
