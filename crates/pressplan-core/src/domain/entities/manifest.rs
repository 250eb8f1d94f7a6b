use std::collections::HashMap;

use serde::Serialize;

use crate::domain::{
    entities::{artifact::Artifact, deployment_plan::DeploymentPlan},
    error::DomainError,
    naming::AssetNaming,
};

/// Everything the site builder needs for one build invocation.
///
/// A manifest is computed fresh on every run and handed over whole. It is
/// only constructible through [`Manifest::new`], which rejects duplicate
/// output filenames, so a manifest in hand is always a valid one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    artifacts: Vec<Artifact>,
    plan: DeploymentPlan,
    asset_naming: AssetNaming,
    #[serde(skip_serializing_if = "Option::is_none")]
    stylesheet_banner: Option<String>,
}

impl Manifest {
    pub fn new(
        artifacts: Vec<Artifact>,
        plan: DeploymentPlan,
        asset_naming: AssetNaming,
    ) -> Result<Self, DomainError> {
        check_unique_outputs(&artifacts)?;

        Ok(Self {
            artifacts,
            plan,
            asset_naming,
            stylesheet_banner: None,
        })
    }

    pub fn with_stylesheet_banner(mut self, banner: impl Into<String>) -> Self {
        self.stylesheet_banner = Some(banner.into());
        self
    }

    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    pub fn plan(&self) -> &DeploymentPlan {
        &self.plan
    }

    pub fn asset_naming(&self) -> &AssetNaming {
        &self.asset_naming
    }

    pub fn stylesheet_banner(&self) -> Option<&str> {
        self.stylesheet_banner.as_deref()
    }

    pub fn artifact_count(&self) -> usize {
        self.artifacts.len()
    }

    pub fn output_filenames(&self) -> impl Iterator<Item = &str> {
        self.artifacts.iter().map(|a| a.output_filename.as_str())
    }
}

fn check_unique_outputs(artifacts: &[Artifact]) -> Result<(), DomainError> {
    let mut seen: HashMap<&str, &Artifact> = HashMap::with_capacity(artifacts.len());

    for artifact in artifacts {
        if let Some(previous) = seen.insert(artifact.output_filename.as_str(), artifact) {
            return Err(DomainError::DuplicateArtifact {
                output: artifact.output_filename.clone(),
                first: previous.source.clone(),
                second: artifact.source.clone(),
            });
        }
    }

    Ok(())
}
