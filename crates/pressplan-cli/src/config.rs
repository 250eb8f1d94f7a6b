//! User configuration for the `pressplan` binary.
//!
//! Layers, later ones winning: built-in defaults, the user-wide file, a
//! `.pressplan.toml` in the project directory (or only `--config FILE` when
//! given), then `PRESSPLAN__<SECTION>__<KEY>` variables. Command-line flags
//! are applied afterwards by each command. The core crate only sees what
//! ends up in a `BuildContext`.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use pressplan_core::domain::{HostingLayout, OutputExtensions, TemplateCategory};

/// Project-local config file name.
pub const LOCAL_CONFIG_FILE: &str = ".pressplan.toml";

/// Environment variable prefix; sections and keys are separated by `__`.
const ENV_PREFIX: &str = "PRESSPLAN";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where things are inside a project.
    pub paths: PathsConfig,
    /// Output naming rules.
    pub naming: NamingConfig,
    /// Deployment layout and dev-server settings.
    pub hosting: HostingLayout,
    /// Terminal presentation.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Project descriptor, relative to the project root.
    pub descriptor: PathBuf,
    /// Page templates, relative to the project root.
    pub pages_dir: PathBuf,
    /// Manifest hand-off file, relative to the project root.
    pub handoff: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamingConfig {
    pub markup_extension: String,
    pub server_page_extension: String,
    /// Restrict classification to these categories. Empty means whatever the
    /// deployment mode supports.
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let extensions = OutputExtensions::default();
        Self {
            paths: PathsConfig {
                descriptor: PathBuf::from("config.json"),
                pages_dir: PathBuf::from(pressplan_core::domain::DEFAULT_PAGES_DIR),
                handoff: PathBuf::from(".pressplan/manifest.json"),
            },
            naming: NamingConfig {
                markup_extension: extensions.markup,
                server_page_extension: extensions.server_page,
                categories: Vec::new(),
            },
            hosting: HostingLayout::default(),
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
        }
    }
}

impl AppConfig {
    /// An explicit `config_file` must exist; the implicit locations are
    /// optional. `project_dir` is where the local `.pressplan.toml` is looked
    /// up.
    pub fn load(config_file: Option<&PathBuf>, project_dir: &Path) -> anyhow::Result<Self> {
        let defaults = config::Config::try_from(&Self::default())
            .context("Failed to build default configuration")?;

        let mut builder = config::Config::builder().add_source(defaults);

        builder = match config_file {
            Some(path) => builder.add_source(config::File::from(path.as_path()).required(true)),
            None => builder
                .add_source(config::File::from(Self::config_path()).required(false))
                .add_source(config::File::from(Self::local_path(project_dir)).required(false)),
        };

        let cfg = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("naming.categories"),
            )
            .build()
            .context("Failed to read configuration")?;

        cfg.try_deserialize()
            .context("Configuration has invalid values")
    }

    /// Path to the user-wide configuration file.
    ///
    /// The platform config dir from `directories`, or `.pressplan.toml` here
    /// when no home directory can be found.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "pressplan", "pressplan")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    pub fn local_path(project_dir: &Path) -> PathBuf {
        project_dir.join(LOCAL_CONFIG_FILE)
    }

    /// The file `load` would read with the highest priority.
    pub fn active_path(config_file: Option<&PathBuf>, project_dir: &Path) -> PathBuf {
        let local = Self::local_path(project_dir);
        match config_file {
            Some(path) => path.clone(),
            None if local.exists() => local,
            None => Self::config_path(),
        }
    }

    pub fn output_extensions(&self) -> OutputExtensions {
        OutputExtensions::new(
            self.naming.markup_extension.as_str(),
            self.naming.server_page_extension.as_str(),
        )
    }

    /// Parsed category restriction; `None` when unrestricted.
    pub fn categories(&self) -> Result<Option<Vec<TemplateCategory>>, String> {
        if self.naming.categories.is_empty() {
            return Ok(None);
        }

        self.naming
            .categories
            .iter()
            .map(|c| c.parse::<TemplateCategory>().map_err(|e| e.to_string()))
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }
}
