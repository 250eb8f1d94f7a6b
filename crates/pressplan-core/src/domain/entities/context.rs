use std::path::{Path, PathBuf};

use crate::domain::{
    classifier::Classifier,
    deployment::HostingLayout,
    entities::descriptor::ProjectDescriptor,
    error::DomainError,
    naming::OutputExtensions,
    value_objects::{BuildProfile, TemplateCategory},
};

/// Default location of page templates, relative to the project root.
pub const DEFAULT_PAGES_DIR: &str = "src/pages";

/// Everything one resolution pass reads, passed explicitly.
///
/// Nothing in the core looks at process-wide state; a watcher that re-runs
/// the pass with an equal context gets an equal manifest.
#[derive(Debug, Clone)]
pub struct BuildContext {
    descriptor: ProjectDescriptor,
    project_root: PathBuf,
    project_name: String,
    pages_dir: PathBuf,
    profile: BuildProfile,
    extensions: OutputExtensions,
    hosting: HostingLayout,
    categories: Option<Vec<TemplateCategory>>,
}

impl BuildContext {
    /// Build a context rooted at `project_root`.
    ///
    /// The project name is the last component of the root, which is why the
    /// root must name a directory (`/srv/www/my-site`, not `/` or `.`).
    pub fn new(
        descriptor: ProjectDescriptor,
        project_root: impl Into<PathBuf>,
    ) -> Result<Self, DomainError> {
        let project_root = project_root.into();
        let project_name = project_root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .filter(|n| !n.is_empty())
            .ok_or_else(|| DomainError::InvalidValue {
                field: "project root",
                reason: format!(
                    "'{}' has no directory name to use as the project name",
                    project_root.display()
                ),
            })?;

        Ok(Self {
            pages_dir: project_root.join(DEFAULT_PAGES_DIR),
            descriptor,
            project_root,
            project_name,
            profile: BuildProfile::default(),
            extensions: OutputExtensions::default(),
            hosting: HostingLayout::default(),
            categories: None,
        })
    }

    /// Relative paths are taken from the project root.
    pub fn with_pages_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.pages_dir = self.project_root.join(dir);
        self
    }

    pub fn with_profile(mut self, profile: BuildProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_extensions(mut self, extensions: OutputExtensions) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn with_hosting(mut self, hosting: HostingLayout) -> Self {
        self.hosting = hosting;
        self
    }

    /// Only classify these categories; everything else becomes `Unknown`.
    pub fn with_categories(mut self, categories: Vec<TemplateCategory>) -> Self {
        self.categories = Some(categories);
        self
    }

    pub fn descriptor(&self) -> &ProjectDescriptor {
        &self.descriptor
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn pages_dir(&self) -> &Path {
        &self.pages_dir
    }

    pub fn profile(&self) -> BuildProfile {
        self.profile
    }

    pub fn extensions(&self) -> &OutputExtensions {
        &self.extensions
    }

    pub fn hosting(&self) -> &HostingLayout {
        &self.hosting
    }

    /// Classifier for this run: the explicit restriction when one was set,
    /// otherwise whatever the deployment mode supports.
    pub fn classifier(&self) -> Result<Classifier, DomainError> {
        match &self.categories {
            Some(categories) => Ok(Classifier::restricted_to(categories.iter().copied())),
            None => Ok(Classifier::for_mode(self.descriptor.deployment_mode()?)),
        }
    }
}
