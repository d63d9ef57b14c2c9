//! CLI command implementations.
//!
//! Each submodule owns one or more related `Commands` variants:
//!
//! | Module    | Commands handled                         |
//! |-----------|------------------------------------------|
//! | `render`  | `Render`                                 |
//! | `jobs`    | `Jobs`, `Show`, `Save`, `Saved`, `Routes`|
//! | `replay`  | `Replay`                                 |
//! | `session` | `Session`                                |
//! | `config`  | `Config`                                 |

pub mod config;
pub mod jobs;
pub mod render;
pub mod replay;
pub mod session;

pub use config::cmd_config;
pub use jobs::{cmd_jobs, cmd_routes, cmd_save, cmd_saved, cmd_show};
pub use render::cmd_render;
pub use replay::cmd_replay;
pub use session::cmd_session;

use anyhow::{Context, Result};
use std::path::Path;

use jobtrack::catalog::JobCatalog;
use jobtrack::config::{CliOverrides, TrackerConfig};
use jobtrack::controller::{BufferSurface, NavigationController};
use jobtrack::render as page_render;
use jobtrack::saved::SavedJobs;
use jobtrack::storage::{FileStore, KeyValueStore};
use jobtrack::ui::icons;

use super::Cli;

/// Effective configuration, dataset and saved-job store for one invocation.
pub struct Tracker {
    pub config: TrackerConfig,
    pub catalog: JobCatalog,
    pub saved: SavedJobs<FileStore>,
}

pub fn open_tracker(project_dir: &Path, cli: &Cli) -> Result<Tracker> {
    let config = TrackerConfig::new(
        project_dir.to_path_buf(),
        CliOverrides {
            jobs: cli.jobs.clone(),
            storage: cli.storage.clone(),
        },
    )?;
    let catalog = JobCatalog::load_or_bundled(config.jobs_path.as_deref())
        .context("Failed to load job dataset")?;
    let saved = SavedJobs::with_key(
        FileStore::new(config.storage_path.clone()),
        config.saved_key.clone(),
    );
    tracing::debug!(
        jobs = catalog.len(),
        storage = %config.storage_path.display(),
        "Opened tracker"
    );
    Ok(Tracker {
        config,
        catalog,
        saved,
    })
}

/// Build a controller over `catalog` and `saved` writing into a buffer.
pub fn controller<S: KeyValueStore>(
    catalog: JobCatalog,
    saved: SavedJobs<S>,
    hamburger: bool,
) -> NavigationController<S, BufferSurface> {
    let controller = NavigationController::new(catalog, saved, BufferSurface::default());
    if hamburger {
        controller
    } else {
        controller.without_hamburger()
    }
}

/// Normalise a user-supplied route into a location fragment.
///
/// Accepts `saved`, `/saved` or `#/saved`.
pub fn route_fragment(route: &str) -> String {
    let route = route.trim();
    if route.starts_with('#') {
        route.to_string()
    } else if route.starts_with('/') {
        format!("#{}", route)
    } else {
        format!("#/{}", route)
    }
}

/// Standalone HTML document for the controller's current state.
pub fn document<S: KeyValueStore>(
    controller: &NavigationController<S, BufferSurface>,
) -> Result<String> {
    let surface = controller.surface();
    let markup = page_render::render_document(
        controller.current_route().entry().title,
        &surface.nav,
        &surface.body,
        surface.modal.as_deref().unwrap_or(""),
        &jobtrack::assets::stylesheet(),
    )?;
    Ok(markup)
}

/// Write `markup` to `output`, or stdout when no file is given.
pub fn emit(markup: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, markup)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("{}Wrote {}", icons::PAGE, path.display());
        }
        None => println!("{}", markup),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_fragment_normalises() {
        assert_eq!(route_fragment("saved"), "#/saved");
        assert_eq!(route_fragment("/saved"), "#/saved");
        assert_eq!(route_fragment("#/saved"), "#/saved");
        assert_eq!(route_fragment("/"), "#/");
    }

    #[test]
    fn test_document_wraps_current_page() {
        use jobtrack::storage::MemoryStore;

        let mut nav = controller(
            JobCatalog::empty(),
            SavedJobs::new(MemoryStore::new()),
            false,
        );
        nav.start(Some("#/digest")).unwrap();

        let html = document(&nav).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Daily Digest | Job Notification Tracker"));
        assert!(html.contains("Digest is empty"));
    }
}
