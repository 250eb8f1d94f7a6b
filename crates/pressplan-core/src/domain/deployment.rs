//! Deployment mode resolution.
//!
//! The three hosting setups are one closed sum type, [`Deployment`], with one
//! variant per mode carrying exactly what that mode needs. Each variant
//! answers the same three questions (output root, public path, dev proxy
//! target), so adding a mode is adding a variant and its arms here.
//!
//! ```text
//! flags            mode                 output root                          public path
//! ─────            ────                 ───────────                          ───────────
//! (none)           Static               <root>/<build_dir>                   /
//! apache           ReverseProxyHosted   <root>                               /<project>
//! wordpress        CmsHosted            <parent>/<cms>/<themes>/<slug>       /<cms>/<project>
//! ```

use std::path::{Path, PathBuf};

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::{
        context::BuildContext,
        deployment_plan::{DeploymentPlan, DevServerRoutes},
    },
    error::DomainError,
    value_objects::DeploymentMode,
};

// ── Hosting layout ───────────────────────────────────────────────────────────

/// Site-specific knobs the modes are computed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostingLayout {
    /// Static build directory, relative to the project root.
    pub build_dir: PathBuf,
    /// Origin of the local web server hosted modes proxy to.
    pub proxy_origin: String,
    /// Directory name of the CMS installation, next to the project.
    pub cms_root: String,
    /// Themes directory inside the CMS installation.
    pub themes_dir: PathBuf,
    pub dev_port: u16,
    /// Open a browser tab when the dev server starts.
    pub open_browser: bool,
}

impl Default for HostingLayout {
    fn default() -> Self {
        Self {
            build_dir: PathBuf::from("dist"),
            proxy_origin: "http://localhost".into(),
            cms_root: "wordpress".into(),
            themes_dir: PathBuf::from("wp-content/themes"),
            dev_port: 8080,
            open_browser: true,
        }
    }
}

// ── Deployment ───────────────────────────────────────────────────────────────

/// A resolved deployment target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deployment {
    Static {
        build_dir: PathBuf,
    },
    ReverseProxyHosted {
        project_root: PathBuf,
        project_name: String,
    },
    CmsHosted {
        theme_dir: PathBuf,
        cms_root: String,
        project_name: String,
    },
}

impl Deployment {
    /// Pick and populate the variant for `ctx`.
    ///
    /// The deployment flags are checked before any path is looked at.
    pub fn from_context(ctx: &BuildContext) -> Result<Self, DomainError> {
        let mode = ctx.descriptor().deployment_mode()?;
        let layout = ctx.hosting();

        match mode {
            DeploymentMode::Static => Ok(Self::Static {
                build_dir: ctx.project_root().join(&layout.build_dir),
            }),
            DeploymentMode::ReverseProxyHosted => Ok(Self::ReverseProxyHosted {
                project_root: ctx.project_root().to_path_buf(),
                project_name: ctx.project_name().to_string(),
            }),
            DeploymentMode::CmsHosted => {
                let slug = slugify(&ctx.descriptor().name);
                if slug.is_empty() {
                    return Err(DomainError::InvalidValue {
                        field: "name",
                        reason: format!(
                            "theme name '{}' has no letters or digits to build a directory name from",
                            ctx.descriptor().name
                        ),
                    });
                }

                Ok(Self::CmsHosted {
                    theme_dir: themes_root(ctx.project_root(), layout).join(slug),
                    cms_root: layout.cms_root.clone(),
                    project_name: ctx.project_name().to_string(),
                })
            }
        }
    }

    pub fn mode(&self) -> DeploymentMode {
        match self {
            Self::Static { .. } => DeploymentMode::Static,
            Self::ReverseProxyHosted { .. } => DeploymentMode::ReverseProxyHosted,
            Self::CmsHosted { .. } => DeploymentMode::CmsHosted,
        }
    }

    pub fn output_root(&self) -> &Path {
        match self {
            Self::Static { build_dir } => build_dir.as_path(),
            Self::ReverseProxyHosted { project_root, .. } => project_root.as_path(),
            Self::CmsHosted { theme_dir, .. } => theme_dir.as_path(),
        }
    }

    pub fn public_path(&self) -> String {
        url_path(&self.path_segments())
    }

    /// Upstream server for the dev proxy; `None` when nothing is hosted.
    pub fn proxy_target(&self, proxy_origin: &str) -> Option<String> {
        match self {
            Self::Static { .. } => None,
            _ => {
                let path = url_path(&self.path_segments());
                let origin = proxy_origin.trim_end_matches('/');
                if path == "/" {
                    Some(format!("{origin}/"))
                } else {
                    Some(format!("{origin}{path}/"))
                }
            }
        }
    }

    pub fn plan(&self, layout: &HostingLayout) -> DeploymentPlan {
        let hosted = self.mode().is_hosted();

        DeploymentPlan {
            mode: self.mode(),
            output_root: self.output_root().to_path_buf(),
            public_path: self.public_path(),
            dev_server: DevServerRoutes {
                proxy_target: self.proxy_target(&layout.proxy_origin),
                rewrite_origin: hosted,
                persist_to_disk: hosted,
                content_root: self.output_root().to_path_buf(),
                port: layout.dev_port,
                compress: true,
                history_api_fallback: true,
                open_browser: layout.open_browser,
                watch_content_root: true,
            },
        }
    }

    fn path_segments(&self) -> Vec<&str> {
        match self {
            Self::Static { .. } => Vec::new(),
            Self::ReverseProxyHosted { project_name, .. } => vec![project_name.as_str()],
            Self::CmsHosted {
                cms_root,
                project_name,
                ..
            } => vec![cms_root.as_str(), project_name.as_str()],
        }
    }
}

/// Resolve the deployment plan for one build.
pub fn resolve_deployment(ctx: &BuildContext) -> Result<DeploymentPlan, DomainError> {
    Ok(Deployment::from_context(ctx)?.plan(ctx.hosting()))
}

// ── Helpers ──────────────────────────────────────────────────────────────────

fn themes_root(project_root: &Path, layout: &HostingLayout) -> PathBuf {
    // A project at the filesystem root has no parent; fall back to the root.
    let parent = project_root.parent().unwrap_or(project_root);
    parent.join(&layout.cms_root).join(&layout.themes_dir)
}

/// `/a/b` from `["a", "b"]`; `/` for no segments. Empty segments and stray
/// slashes inside segments collapse away.
/// Bytes escaped inside one URL path segment (WHATWG path set plus `/`
/// and `%`).
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Absolute URL path from directory names. `cms_root` may hold nested
/// segments (`cms/site`); each piece is percent-encoded on its own.
fn url_path(segments: &[&str]) -> String {
    let parts: Vec<String> = segments
        .iter()
        .flat_map(|s| s.split('/'))
        .filter(|s| !s.is_empty())
        .map(|s| utf8_percent_encode(s, PATH_SEGMENT).to_string())
        .collect();

    format!("/{}", parts.join("/"))
}

/// Lowercase `name` and collapse every run of non-alphanumeric characters
/// into a single `-`, with no separator at either end.
///
/// | Input | Output |
/// |-------|--------|
/// | "My Theme" | "my-theme" |
/// | "  Acme -- Corp!! " | "acme-corp" |
/// | "Café Ünïcode" | "café-ünïcode" |
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_separator = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::descriptor::ProjectDescriptor;

    fn ctx(descriptor: ProjectDescriptor) -> BuildContext {
        BuildContext::new(descriptor, "/srv/www/my-site").unwrap()
    }

    #[test]
    fn static_builds_into_dist() {
        let plan = resolve_deployment(&ctx(ProjectDescriptor::new("Site"))).unwrap();

        assert_eq!(plan.mode, DeploymentMode::Static);
        assert_eq!(plan.output_root, Path::new("/srv/www/my-site/dist"));
        assert_eq!(plan.public_path, "/");
        assert_eq!(plan.proxy_target(), None);
        assert!(!plan.dev_server.persist_to_disk);
        assert!(!plan.dev_server.rewrite_origin);
        assert_eq!(plan.dev_server.content_root, plan.output_root);
    }

    #[test]
    fn apache_emits_in_place_and_proxies() {
        let plan = resolve_deployment(&ctx(ProjectDescriptor::new("Site").apache(true))).unwrap();

        assert_eq!(plan.mode, DeploymentMode::ReverseProxyHosted);
        assert_eq!(plan.output_root, Path::new("/srv/www/my-site"));
        assert_eq!(plan.public_path, "/my-site");
        assert_eq!(plan.proxy_target(), Some("http://localhost/my-site/"));
        assert!(plan.dev_server.persist_to_disk);
        assert!(plan.dev_server.rewrite_origin);
    }

    #[test]
    fn wordpress_emits_into_themes_dir() {
        let plan = resolve_deployment(&ctx(
            ProjectDescriptor::new("Acme Starter Theme").wordpress(true),
        ))
        .unwrap();

        assert_eq!(plan.mode, DeploymentMode::CmsHosted);
        assert_eq!(
            plan.output_root,
            Path::new("/srv/www/wordpress/wp-content/themes/acme-starter-theme")
        );
        assert_eq!(plan.public_path, "/wordpress/my-site");
        assert_eq!(plan.proxy_target(), Some("http://localhost/wordpress/my-site/"));
        assert!(plan.dev_server.persist_to_disk);
    }

    #[test]
    fn both_flags_are_rejected() {
        let err = resolve_deployment(&ctx(
            ProjectDescriptor::new("Site").apache(true).wordpress(true),
        ))
        .unwrap_err();

        assert_eq!(
            err,
            DomainError::InvalidDeploymentConfig {
                first: "apache",
                second: "wordpress"
            }
        );
        let msg = err.to_string();
        assert!(msg.contains("apache") && msg.contains("wordpress"));
    }

    #[test]
    fn mode_exclusivity_over_all_flag_combinations() {
        for apache in [false, true] {
            for wordpress in [false, true] {
                let descriptor = ProjectDescriptor::new("Site")
                    .apache(apache)
                    .wordpress(wordpress);
                let result = resolve_deployment(&ctx(descriptor));
                assert_eq!(
                    result.is_err(),
                    apache && wordpress,
                    "apache={apache} wordpress={wordpress}"
                );
            }
        }
    }

    #[test]
    fn custom_layout_is_honoured() {
        let layout = HostingLayout {
            build_dir: PathBuf::from("public"),
            proxy_origin: "http://127.0.0.1:8888/".into(),
            cms_root: "cms".into(),
            themes_dir: PathBuf::from("themes"),
            dev_port: 3000,
            open_browser: false,
        };
        let plan = resolve_deployment(
            &ctx(ProjectDescriptor::new("T").wordpress(true)).with_hosting(layout),
        )
        .unwrap();

        assert_eq!(plan.output_root, Path::new("/srv/www/cms/themes/t"));
        assert_eq!(plan.proxy_target(), Some("http://127.0.0.1:8888/cms/my-site/"));
        assert_eq!(plan.dev_server.port, 3000);
        assert!(!plan.dev_server.open_browser);
    }

    #[test]
    fn theme_name_without_letters_is_rejected() {
        let err =
            resolve_deployment(&ctx(ProjectDescriptor::new("!!!").wordpress(true))).unwrap_err();
        assert!(matches!(err, DomainError::InvalidValue { field: "name", .. }));
    }

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("My Theme"), "my-theme");
        assert_eq!(slugify("  Acme -- Corp!! "), "acme-corp");
        assert_eq!(slugify("already-a-slug"), "already-a-slug");
        assert_eq!(slugify("v2.0_Final"), "v2-0-final");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn slugify_is_deterministic() {
        let name = "Théme Name / With: Punctuation";
        let first = slugify(name);
        for _ in 0..10 {
            assert_eq!(slugify(name), first);
        }
    }

    #[test]
    fn url_path_collapses_slashes() {
        assert_eq!(url_path(&[]), "/");
        assert_eq!(url_path(&["/wp/", "site"]), "/wp/site");
    }

    #[test]
    fn url_path_encodes_each_segment() {
        assert_eq!(url_path(&["my site"]), "/my%20site");
        assert_eq!(url_path(&["wp", "50%#1"]), "/wp/50%25%231");
        assert_eq!(url_path(&["café"]), "/caf%C3%A9");
    }

    #[test]
    fn project_name_with_space_yields_valid_urls() {
        let ctx = BuildContext::new(ProjectDescriptor::new("Site").apache(true), "/srv/www/my site")
            .unwrap();
        let plan = resolve_deployment(&ctx).unwrap();

        assert_eq!(plan.output_root, Path::new("/srv/www/my site"));
        assert_eq!(plan.public_path, "/my%20site");
        assert_eq!(plan.proxy_target(), Some("http://localhost/my%20site/"));
    }
}
