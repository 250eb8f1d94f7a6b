pub mod artifact;
pub mod context;
pub mod deployment_plan;
pub mod descriptor;
pub mod manifest;
pub mod template_file;

pub use crate::domain::DomainError;
pub use artifact::{Artifact, ArtifactMetadata};
pub use context::BuildContext;
pub use deployment_plan::{DeploymentPlan, DevServerRoutes};
pub use descriptor::ProjectDescriptor;
pub use manifest::Manifest;
pub use template_file::TemplateFile;
