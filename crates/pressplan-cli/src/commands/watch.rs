//! `pressplan watch`: rebuild the hand-off manifest on change.
//!
//! Watches the pages directory and the directory holding the descriptor.
//! Every rebuild reloads the descriptor and re-runs a full pass; a failing
//! pass is reported and the previous hand-off file is left in place.

use std::{
    path::{Path, PathBuf},
    sync::mpsc::channel,
    time::{Duration, Instant},
};

use chrono::Local;
use notify::RecursiveMode;
use notify_debouncer_mini::{DebouncedEventKind, new_debouncer};
use tracing::{debug, info, instrument, warn};

use pressplan_core::application::ApplicationError;

use crate::{
    cli::WatchArgs,
    commands::{build, project},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Which paths a rebuild cares about.
#[derive(Debug, Clone)]
pub struct WatchTargets {
    pub pages_dir: PathBuf,
    pub descriptor: PathBuf,
    pub handoff: PathBuf,
}

impl WatchTargets {
    /// Direct children of the pages dir, or the descriptor itself. The
    /// hand-off file and its temp sibling never count.
    pub fn is_relevant(&self, path: &Path) -> bool {
        if path == self.descriptor {
            return true;
        }
        if self.is_handoff(path) {
            return false;
        }
        path.parent() == Some(self.pages_dir.as_path())
    }

    fn is_handoff(&self, path: &Path) -> bool {
        let (Some(name), Some(handoff)) = (path.file_name(), self.handoff.file_name()) else {
            return false;
        };
        path.parent() == self.handoff.parent()
            && name.to_string_lossy().starts_with(&*handoff.to_string_lossy())
    }
}

#[instrument(skip_all, fields(debounce_ms = args.debounce))]
pub fn execute(args: WatchArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let root = project::resolve_root(&args.project)?;
    let targets = WatchTargets {
        pages_dir: project::pages_dir(&args.project, &config, &root),
        descriptor: project::descriptor_path(&args.project, &config, &root),
        handoff: build::handoff_path(&args.project, args.out.as_ref(), &config)?,
    };

    // Nothing to watch without a pages directory.
    if !targets.pages_dir.is_dir() {
        return Err(app_error(ApplicationError::PagesDirMissing {
            path: targets.pages_dir.clone(),
        }));
    }

    let (tx, rx) = channel();
    let mut debouncer =
        new_debouncer(Duration::from_millis(args.debounce), tx).map_err(watch_error)?;

    let descriptor_dir = targets.descriptor.parent().unwrap_or(&root).to_path_buf();
    for dir in [&targets.pages_dir, &descriptor_dir] {
        debouncer
            .watcher()
            .watch(dir, RecursiveMode::NonRecursive)
            .map_err(watch_error)?;
        debug!(dir = %dir.display(), "Watching");
    }

    if args.clear {
        clear_screen();
    }
    rebuild(&args, &config, &targets, &output)?;
    output.info(&format!(
        "[{}] Watching {} for changes (Ctrl-C to stop)",
        timestamp(),
        targets.pages_dir.display()
    ))?;

    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                let changed: Vec<_> = events
                    .iter()
                    .filter(|e| {
                        matches!(e.kind, DebouncedEventKind::Any) && targets.is_relevant(&e.path)
                    })
                    .collect();

                if changed.is_empty() {
                    continue;
                }

                if args.clear {
                    clear_screen();
                }
                for event in &changed {
                    if let Some(name) = event.path.file_name() {
                        output.detail(&format!(
                            "[{}] Changed: {}",
                            timestamp(),
                            name.to_string_lossy()
                        ))?;
                    }
                }

                rebuild(&args, &config, &targets, &output)?;
            }
            Ok(Err(error)) => {
                warn!(%error, "Watch error, continuing");
                output.warning(&format!("[{}] Watch error: {error}", timestamp()))?;
            }
            Err(e) => return Err(watch_error(e)),
        }
    }
}

/// One pass. Pipeline failures are printed, not returned; only output
/// errors end the loop.
fn rebuild(
    args: &WatchArgs,
    config: &AppConfig,
    targets: &WatchTargets,
    output: &OutputManager,
) -> CliResult<()> {
    let started = Instant::now();
    output.info(&format!("[{}] Building...", timestamp()))?;

    let result = project::load_context(&args.project, config)
        .and_then(|ctx| build::run_build(&ctx, &targets.handoff));

    match result {
        Ok(manifest) => {
            info!(artifacts = manifest.artifact_count(), "Rebuilt");
            build::report(&manifest, &targets.handoff, output)?;
            output.detail(&format!("took {}", format_duration(started.elapsed())))?;
        }
        Err(err) => {
            err.log();
            output.error(&err.to_string())?;
            for suggestion in err.suggestions() {
                output.detail(&suggestion)?;
            }
        }
    }

    Ok(())
}

fn watch_error(e: impl std::fmt::Display) -> CliError {
    app_error(ApplicationError::Watch {
        reason: e.to_string(),
    })
}

fn app_error(err: ApplicationError) -> CliError {
    CliError::Core(err.into())
}

fn clear_screen() {
    print!("\x1B[2J\x1B[1;1H");
}

fn timestamp() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

fn format_duration(duration: Duration) -> String {
    let millis = duration.as_millis();
    if millis < 1000 {
        format!("{millis}ms")
    } else {
        format!("{:.2}s", duration.as_secs_f64())
    }
}
