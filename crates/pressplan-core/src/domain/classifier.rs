//! Template classification registry.
//!
//! # Design Rationale
//!
//! Extension lookup is a closed table, not a chain of `if` checks spread
//! over the resolver: every recognised extension appears exactly once in
//! [`EXTENSION_REGISTRY`]. Anything not in the table is
//! [`TemplateCategory::Unknown`], which is a valid answer, so classification
//! never fails.
//!
//! # Adding a New Template Type
//!
//! 1. Add a variant to `TemplateCategory` in `value_objects.rs`
//! 2. Add one [`ExtensionRule`] entry to [`EXTENSION_REGISTRY`]
//! 3. Give it an output extension in `naming::OutputExtensions`

use crate::domain::{
    entities::template_file::TemplateFile,
    value_objects::{DeploymentMode, TemplateCategory},
};

// ── Extension table ──────────────────────────────────────────────────────────

/// Maps a set of source extensions to one category.
#[derive(Debug, Clone, Copy)]
pub struct ExtensionRule {
    pub category: TemplateCategory,
    /// Lowercase, without the leading dot.
    pub extensions: &'static [&'static str],
}

/// Single source of truth for which extensions are templates.
pub static EXTENSION_REGISTRY: &[ExtensionRule] = &[
    ExtensionRule {
        category: TemplateCategory::MarkupTemplate,
        extensions: &["hbs", "handlebars"],
    },
    ExtensionRule {
        category: TemplateCategory::ServerPage,
        extensions: &["php"],
    },
];

/// Look an extension up in the registry.
///
/// Case-insensitive and tolerant of a leading dot.
pub fn category_for_extension(extension: &str) -> TemplateCategory {
    let ext = extension.trim_start_matches('.').to_ascii_lowercase();

    EXTENSION_REGISTRY
        .iter()
        .find(|rule| rule.extensions.contains(&ext.as_str()))
        .map_or(TemplateCategory::Unknown, |rule| rule.category)
}

/// Categories a deployment mode can serve.
///
/// A static build has no PHP interpreter behind it, so server pages are only
/// recognised when a server is hosting the output.
pub fn supported_categories(mode: DeploymentMode) -> &'static [TemplateCategory] {
    match mode {
        DeploymentMode::Static => &[TemplateCategory::MarkupTemplate],
        DeploymentMode::ReverseProxyHosted | DeploymentMode::CmsHosted => {
            &TemplateCategory::RESOLVABLE
        }
    }
}

// ── Classifier ───────────────────────────────────────────────────────────────

/// Classifies template files for one run.
///
/// Categories outside `enabled` are reported as `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classifier {
    enabled: Vec<TemplateCategory>,
}

impl Classifier {
    /// Recognise every category in the registry.
    pub fn all() -> Self {
        Self {
            enabled: TemplateCategory::RESOLVABLE.to_vec(),
        }
    }

    /// Recognise only the given categories. `Unknown` in the input is ignored.
    pub fn restricted_to(categories: impl IntoIterator<Item = TemplateCategory>) -> Self {
        let mut enabled = Vec::new();
        for category in categories {
            if category.is_resolvable() && !enabled.contains(&category) {
                enabled.push(category);
            }
        }
        Self { enabled }
    }

    pub fn for_mode(mode: DeploymentMode) -> Self {
        Self::restricted_to(supported_categories(mode).iter().copied())
    }

    pub fn enabled(&self) -> &[TemplateCategory] {
        &self.enabled
    }

    pub fn classify(&self, file: &TemplateFile) -> TemplateCategory {
        let category = category_for_extension(file.extension());
        if self.enabled.contains(&category) {
            category
        } else {
            TemplateCategory::Unknown
        }
    }

    /// Split files into resolvable `(file, category)` pairs and the excluded
    /// rest, keeping the input order on both sides.
    pub fn partition<'a>(
        &self,
        files: &'a [TemplateFile],
    ) -> (Vec<(&'a TemplateFile, TemplateCategory)>, Vec<&'a TemplateFile>) {
        let mut resolvable = Vec::new();
        let mut excluded = Vec::new();

        for file in files {
            match self.classify(file) {
                TemplateCategory::Unknown => excluded.push(file),
                category => resolvable.push((file, category)),
            }
        }

        (resolvable, excluded)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::all()
    }
}
