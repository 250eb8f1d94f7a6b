use std::path::PathBuf;

use serde::Serialize;

use crate::domain::value_objects::DeploymentMode;

/// Where output goes and how the dev server routes requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentPlan {
    pub mode: DeploymentMode,
    pub output_root: PathBuf,
    /// URL prefix under which emitted files are served. Always starts with `/`.
    pub public_path: String,
    pub dev_server: DevServerRoutes,
}

/// Routing directive for the external dev server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServerRoutes {
    /// Upstream server to proxy to; `None` serves the build output directly.
    pub proxy_target: Option<String>,
    pub rewrite_origin: bool,
    /// Write files to disk during development. Required whenever an upstream
    /// server reads the emitted files itself.
    pub persist_to_disk: bool,
    pub content_root: PathBuf,
    pub port: u16,
    pub compress: bool,
    pub history_api_fallback: bool,
    pub open_browser: bool,
    /// Reload when files under `content_root` change.
    pub watch_content_root: bool,
}

impl DeploymentPlan {
    pub fn proxy_target(&self) -> Option<&str> {
        self.dev_server.proxy_target.as_deref()
    }
}
