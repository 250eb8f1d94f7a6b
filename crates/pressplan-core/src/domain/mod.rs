//! Resolution rules with no I/O.
//!
//! Everything here works on values handed in by the application layer:
//! template names in, categories, output names, deployment paths and dev
//! server routes out. The extension table and the mode-to-layout mapping are
//! closed `match`es, so adding a template kind is a compile-time change.

pub mod classifier;
pub mod deployment;
pub mod entities;
pub mod error;
pub mod naming;
pub mod value_objects;

mod validation;

pub use classifier::{Classifier, EXTENSION_REGISTRY, ExtensionRule, category_for_extension};
pub use deployment::{Deployment, HostingLayout, resolve_deployment, slugify};
pub use entities::{
    Artifact, ArtifactMetadata, BuildContext, DeploymentPlan, DevServerRoutes, Manifest,
    ProjectDescriptor, TemplateFile,
    context::DEFAULT_PAGES_DIR,
    descriptor::{DeploymentFlags, FaviconOptions, ThemeMetadata},
};
pub use error::{DomainError, ErrorCategory};
pub use naming::{AssetNaming, OutputExtensions, output_filename, resolve_artifact};
pub use value_objects::{BuildProfile, DeploymentMode, TemplateCategory};

pub use validation::DomainValidator;
