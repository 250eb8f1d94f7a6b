//! Outbound ports: where pages come from, how the descriptor is read, and
//! who receives the finished manifest.

use std::path::Path;

use crate::domain::{Manifest, ProjectDescriptor, TemplateFile};
use crate::error::PressResult;

/// Lists the page templates of a project.
///
/// Implemented by:
/// - `pressplan_adapters::page_source::LocalPageSource` (production)
/// - `pressplan_adapters::page_source::MemoryPageSource` (testing)
///
/// ## Contract
///
/// - One entry per regular file directly inside `dir`; no recursion
/// - Order is stable for one process run
/// - A missing or unreadable directory is an error, never an empty list
#[cfg_attr(test, mockall::automock)]
pub trait PageSource: Send + Sync {
    fn discover(&self, dir: &Path) -> PressResult<Vec<TemplateFile>>;
}

/// Reads and parses the project descriptor.
pub trait DescriptorLoader: Send + Sync {
    fn load(&self, path: &Path) -> PressResult<ProjectDescriptor>;
}

/// The bundler side of a build.
///
/// Implemented by:
/// - `pressplan_adapters::builder::ManifestFileBuilder` (JSON hand-off file)
/// - `pressplan_adapters::builder::RecordingBuilder` (testing)
///
/// Receives a complete manifest or nothing; the core never hands over a
/// partial one.
#[cfg_attr(test, mockall::automock)]
pub trait SiteBuilder: Send + Sync {
    fn build(&self, manifest: &Manifest) -> PressResult<()>;
}
