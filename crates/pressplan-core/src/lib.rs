//! Core of Pressplan: from a project descriptor and a folder of page
//! templates to a build manifest.
//!
//! The crate has two layers:
//!
//! - [`domain`] is pure: classifying templates, naming outputs, resolving
//!   where a site deploys and how the dev server proxies it. It never
//!   touches the filesystem.
//! - [`application`] wires the domain to the outside world through three
//!   ports ([`PageSource`](application::PageSource),
//!   [`DescriptorLoader`](application::DescriptorLoader),
//!   [`SiteBuilder`](application::SiteBuilder)). `pressplan-adapters`
//!   implements them; `pressplan-cli` drives the services.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pressplan_core::{
//!     application::ManifestService,
//!     domain::{BuildContext, ProjectDescriptor},
//! };
//! # fn demo(pages: Box<dyn pressplan_core::application::PageSource>) -> pressplan_core::error::PressResult<()> {
//!
//! // Describe the project.
//! let descriptor = ProjectDescriptor::new("Acme").wordpress(true);
//! let ctx = BuildContext::new(descriptor, "/srv/www/acme")?;
//!
//! // Discover and classify the pages through an injected source.
//! let service = ManifestService::new(pages);
//! let manifest = service.assemble(&ctx)?;
//! println!("{} artifacts", manifest.artifact_count());
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod error;

/// Everything a driver needs for the common plan-and-build flow.
pub mod prelude {
    pub use crate::application::{
        BuildService, ManifestService,
        ports::{DescriptorLoader, PageSource, SiteBuilder},
    };
    pub use crate::domain::{
        Artifact, BuildContext, BuildProfile, DeploymentMode, DeploymentPlan, HostingLayout,
        Manifest, OutputExtensions, ProjectDescriptor, TemplateCategory, TemplateFile,
    };
    pub use crate::error::{PressError, PressResult};
}
