//! JSON hand-off file for the external bundler.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use tracing::{info, instrument};

use pressplan_core::{
    application::{ApplicationError, ports::SiteBuilder},
    domain::Manifest,
    error::{PressError, PressResult},
};

/// Writes the manifest as pretty-printed JSON for the bundler config to read.
///
/// The file is written next to its final location and renamed into place, so
/// a reader never sees a half-written manifest, and a failed write leaves the
/// previous file untouched.
#[derive(Debug, Clone)]
pub struct ManifestFileBuilder {
    path: PathBuf,
}

impl ManifestFileBuilder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The exact bytes `build` writes.
    pub fn render(manifest: &Manifest) -> PressResult<String> {
        let mut json = serde_json::to_string_pretty(manifest).map_err(builder_error)?;
        json.push('\n');
        Ok(json)
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SiteBuilder for ManifestFileBuilder {
    #[instrument(skip_all, fields(path = %self.path.display()))]
    fn build(&self, manifest: &Manifest) -> PressResult<()> {
        let json = Self::render(manifest)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(builder_error)?;
        }

        let temp = self.temp_path();
        let written = fs::File::create(&temp)
            .and_then(|mut file| {
                file.write_all(json.as_bytes())?;
                file.sync_all()
            })
            .and_then(|()| fs::rename(&temp, &self.path));

        if let Err(e) = written {
            let _ = fs::remove_file(&temp);
            return Err(builder_error(e));
        }

        info!(bytes = json.len(), "Manifest written");
        Ok(())
    }
}

fn builder_error(e: impl std::fmt::Display) -> PressError {
    ApplicationError::BuilderFailed {
        reason: e.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pressplan_core::domain::{
        AssetNaming, BuildContext, BuildProfile, ProjectDescriptor, resolve_deployment,
    };
    use tempfile::TempDir;

    fn manifest() -> Manifest {
        let ctx = BuildContext::new(ProjectDescriptor::new("Site"), "/srv/site").unwrap();
        Manifest::new(
            Vec::new(),
            resolve_deployment(&ctx).unwrap(),
            AssetNaming::for_profile(BuildProfile::Development),
        )
        .unwrap()
    }

    #[test]
    fn writes_json_and_creates_parents() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".pressplan/manifest.json");
        let builder = ManifestFileBuilder::new(&path);

        builder.build(&manifest()).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["plan"]["publicPath"], "/");
        assert!(!temp.path().join(".pressplan/manifest.json.tmp").exists());
    }

    #[test]
    fn rebuild_is_byte_identical() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("manifest.json");
        let builder = ManifestFileBuilder::new(&path);

        builder.build(&manifest()).unwrap();
        let first = fs::read(&path).unwrap();
        builder.build(&manifest()).unwrap();

        assert_eq!(first, fs::read(&path).unwrap());
    }

    #[test]
    fn unwritable_target_keeps_previous_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("manifest.json");
        fs::write(&path, "previous").unwrap();

        // A directory where the temp file should go makes the write fail.
        fs::create_dir(temp.path().join("manifest.json.tmp")).unwrap();
        let err = ManifestFileBuilder::new(&path).build(&manifest()).unwrap_err();

        assert!(matches!(
            err,
            PressError::Application(ApplicationError::BuilderFailed { .. })
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), "previous");
    }
}
