//! Artifact name resolution.
//!
//! Turns a classified template into the [`Artifact`] the builder emits:
//! the output filename is the source base name plus the category's
//! canonical extension, and the metadata bag is copied from the project
//! descriptor.
//!
//! Also home of [`AssetNaming`], the only place the build profile matters.

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::{
        artifact::{Artifact, ArtifactMetadata},
        descriptor::ProjectDescriptor,
        template_file::TemplateFile,
    },
    error::DomainError,
    value_objects::{BuildProfile, TemplateCategory},
};

// ── Output extensions ────────────────────────────────────────────────────────

/// Canonical output extension per category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputExtensions {
    pub markup: String,
    pub server_page: String,
}

impl OutputExtensions {
    pub fn new(markup: impl Into<String>, server_page: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
            server_page: server_page.into(),
        }
    }

    /// Extension without a leading dot, or `None` for `Unknown`.
    pub fn for_category(&self, category: TemplateCategory) -> Option<&str> {
        let ext = match category {
            TemplateCategory::MarkupTemplate => &self.markup,
            TemplateCategory::ServerPage => &self.server_page,
            TemplateCategory::Unknown => return None,
        };
        Some(ext.trim_start_matches('.'))
    }
}

impl Default for OutputExtensions {
    fn default() -> Self {
        Self::new("html", "php")
    }
}

// ── Resolution ───────────────────────────────────────────────────────────────

/// Output filename for `file` under `category`.
///
/// Only the final extension is replaced; the base name is kept byte for
/// byte, embedded dots included.
pub fn output_filename(
    file: &TemplateFile,
    category: TemplateCategory,
    extensions: &OutputExtensions,
) -> Result<String, DomainError> {
    let ext = extensions
        .for_category(category)
        .ok_or_else(|| DomainError::UnsupportedCategory {
            path: file.source_path().to_path_buf(),
            category,
        })?;

    if ext.is_empty() {
        return Ok(file.base_name().to_string());
    }
    Ok(format!("{}.{}", file.base_name(), ext))
}

/// Resolve one classified template into an artifact.
///
/// Callers filter out `Unknown` first; reaching this with `Unknown` is a bug
/// and reported as [`DomainError::UnsupportedCategory`].
pub fn resolve_artifact(
    file: &TemplateFile,
    category: TemplateCategory,
    descriptor: &ProjectDescriptor,
    extensions: &OutputExtensions,
) -> Result<Artifact, DomainError> {
    let output_filename = output_filename(file, category, extensions)?;

    Ok(Artifact {
        output_filename,
        source: file.source_path().to_path_buf(),
        category,
        metadata: ArtifactMetadata {
            title: descriptor.name.clone(),
            description: descriptor.description.clone(),
            author: descriptor.author.clone(),
        },
    })
}

// ── Asset naming ─────────────────────────────────────────────────────────────

const NAME_TOKEN: &str = "[name]";
const EXT_TOKEN: &str = "[ext]";
const HASH_TOKEN: &str = "[contenthash]";

/// Filename pattern for binary assets (images) under a build profile.
///
/// Development keeps readable names; production names files by content hash
/// so they can be cached forever.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetNaming {
    pub profile: BuildProfile,
    pub pattern: String,
}

impl AssetNaming {
    pub const ASSET_DIR: &'static str = "assets/img";

    pub fn for_profile(profile: BuildProfile) -> Self {
        let file = match profile {
            BuildProfile::Development => format!("{NAME_TOKEN}.{EXT_TOKEN}"),
            BuildProfile::Production => format!("{HASH_TOKEN}.{EXT_TOKEN}"),
        };

        Self {
            profile,
            pattern: format!("{}/{file}", Self::ASSET_DIR),
        }
    }

    /// Expand the pattern for one asset. Hashing itself belongs to the
    /// builder; this only substitutes.
    pub fn resolve(&self, name: &str, ext: &str, content_hash: &str) -> String {
        self.pattern
            .replace(NAME_TOKEN, name)
            .replace(HASH_TOKEN, content_hash)
            .replace(EXT_TOKEN, ext.trim_start_matches('.'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(path: &str) -> TemplateFile {
        TemplateFile::from_path(path).unwrap()
    }

    #[test]
    fn markup_gets_html() {
        let name = output_filename(
            &file("/p/index.hbs"),
            TemplateCategory::MarkupTemplate,
            &OutputExtensions::default(),
        )
        .unwrap();
        assert_eq!(name, "index.html");
    }

    #[test]
    fn server_page_keeps_php() {
        let name = output_filename(
            &file("/p/home.php"),
            TemplateCategory::ServerPage,
            &OutputExtensions::default(),
        )
        .unwrap();
        assert_eq!(name, "home.php");
    }

    #[test]
    fn only_final_extension_is_replaced() {
        let name = output_filename(
            &file("/p/about.en.handlebars"),
            TemplateCategory::MarkupTemplate,
            &OutputExtensions::default(),
        )
        .unwrap();
        assert_eq!(name, "about.en.html");
    }

    #[test]
    fn configured_extension_tolerates_leading_dot() {
        let exts = OutputExtensions::new(".htm", "php");
        let name =
            output_filename(&file("/p/a.hbs"), TemplateCategory::MarkupTemplate, &exts).unwrap();
        assert_eq!(name, "a.htm");
    }

    #[test]
    fn unknown_category_is_rejected() {
        let err = output_filename(
            &file("/p/notes.txt"),
            TemplateCategory::Unknown,
            &OutputExtensions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::UnsupportedCategory { .. }));
    }

    #[test]
    fn metadata_is_copied_from_descriptor() {
        let descriptor = ProjectDescriptor::new("Acme")
            .description("A site")
            .author("Jo");
        let artifact = resolve_artifact(
            &file("/p/index.hbs"),
            TemplateCategory::MarkupTemplate,
            &descriptor,
            &OutputExtensions::default(),
        )
        .unwrap();

        assert_eq!(artifact.metadata.title, "Acme");
        assert_eq!(artifact.metadata.description, "A site");
        assert_eq!(artifact.metadata.author, "Jo");
        assert_eq!(artifact.source, std::path::Path::new("/p/index.hbs"));
    }

    #[test]
    fn development_assets_keep_their_names() {
        let naming = AssetNaming::for_profile(BuildProfile::Development);
        assert_eq!(naming.pattern, "assets/img/[name].[ext]");
        assert_eq!(naming.resolve("logo", "png", "abc123"), "assets/img/logo.png");
    }

    #[test]
    fn production_assets_use_content_hash() {
        let naming = AssetNaming::for_profile(BuildProfile::Production);
        assert_eq!(naming.pattern, "assets/img/[contenthash].[ext]");
        assert_eq!(naming.resolve("logo", ".png", "abc123"), "assets/img/abc123.png");
    }
}
