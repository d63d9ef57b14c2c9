//! Route rendering command: `jobtrack render`.

use anyhow::{Context, Result};
use std::path::Path;

use super::super::{Cli, FilterArgs};
use super::{controller, document, emit, open_tracker, route_fragment};

pub fn cmd_render(
    project_dir: &Path,
    cli: &Cli,
    route: Option<&str>,
    filters: &FilterArgs,
    as_document: bool,
    output: Option<&Path>,
    open: bool,
) -> Result<()> {
    let tracker = open_tracker(project_dir, cli)?;
    let hamburger = tracker.config.hamburger;
    let preview_path = tracker.config.tracker_dir.join("preview.html");

    let mut controller =
        controller(tracker.catalog, tracker.saved, hamburger).with_filter(filters.to_filter());
    let fragment = route.map(route_fragment);
    controller.start(fragment.as_deref())?;

    // Opening in a browser needs a full document on disk.
    if open {
        let path = output.unwrap_or(preview_path.as_path());
        emit(&document(&controller)?, Some(path))?;
        open::that(path).with_context(|| format!("Failed to open {}", path.display()))?;
        return Ok(());
    }

    let markup = if as_document {
        document(&controller)?
    } else {
        controller.surface().body.clone()
    };
    emit(&markup, output)
}
