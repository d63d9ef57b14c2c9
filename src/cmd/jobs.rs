//! Job listing, detail and saved-state commands.

use anyhow::{Result, bail};
use console::style;
use std::path::Path;

use jobtrack::catalog::JobCatalog;
use jobtrack::render::{self, derive_for_route};
use jobtrack::routes::{ROUTES, Route};
use jobtrack::ui::{self, icons};

use super::super::{Cli, FilterArgs};
use super::open_tracker;

pub fn cmd_jobs(project_dir: &Path, cli: &Cli, filters: &FilterArgs, saved_only: bool) -> Result<()> {
    let tracker = open_tracker(project_dir, cli)?;
    let filter = filters.to_filter();
    let saved_ids = tracker.saved.ids();
    let route = if saved_only {
        Route::Saved
    } else {
        Route::Dashboard
    };
    let (derived, has_data) = derive_for_route(route, &tracker.catalog, &filter, &saved_ids);

    println!();
    if derived.is_empty() {
        let copy = if has_data {
            jobtrack::routes::NO_MATCHES
        } else {
            route.entry().empty_state.unwrap_or(jobtrack::routes::NO_MATCHES)
        };
        println!("{}", style(copy.title).bold());
        println!("{}", copy.message);
        println!();
        return Ok(());
    }

    for line in ui::job_table(&derived, &saved_ids) {
        println!("{}", line);
    }
    println!();
    println!(
        "{} of {} jobs (sorted by {})",
        derived.len(),
        listing_total(route, &tracker.catalog, &saved_ids),
        filter.sort
    );
    println!();
    Ok(())
}

/// Denominator for the result count: the saved total on the saved page.
fn listing_total(route: Route, catalog: &JobCatalog, saved_ids: &[u64]) -> usize {
    match route {
        Route::Saved => catalog
            .jobs()
            .iter()
            .filter(|job| saved_ids.contains(&job.id))
            .count(),
        _ => catalog.len(),
    }
}

pub fn cmd_show(project_dir: &Path, cli: &Cli, id: u64, html: bool) -> Result<()> {
    let tracker = open_tracker(project_dir, cli)?;
    let Some(job) = tracker.catalog.get(id) else {
        bail!("Job {} not found", id);
    };
    let saved = tracker.saved.is_saved(id);

    if html {
        println!("{}", render::render_job_modal(job, saved)?);
    } else {
        println!();
        print!("{}", ui::job_detail(job, saved, ui::terminal_width()));
        println!();
    }
    Ok(())
}

pub fn cmd_save(project_dir: &Path, cli: &Cli, id: u64) -> Result<()> {
    let mut tracker = open_tracker(project_dir, cli)?;
    let Some(job) = tracker.catalog.get(id) else {
        bail!("Job {} not found", id);
    };
    let title = job.title.clone();

    if tracker.saved.toggle(id)? {
        println!("{}Saved job {}: {}", icons::SAVED, id, title);
    } else {
        println!("{}Removed job {} from saved: {}", icons::UNSAVED, id, title);
    }
    Ok(())
}

pub fn cmd_saved(project_dir: &Path, cli: &Cli) -> Result<()> {
    cmd_jobs(project_dir, cli, &FilterArgs::default(), true)
}

pub fn cmd_routes() {
    println!();
    println!("{:<12} {:<16} Subtitle", "Path", "Title");
    println!("{:<12} {:<16} --------", "----", "-----");
    for entry in ROUTES.iter() {
        println!(
            "{:<12} {:<16} {}",
            entry.route.path(),
            entry.title,
            style(entry.subtitle).dim()
        );
    }
    println!();
    println!(
        "{}Unknown paths redirect to {}",
        icons::LINK,
        Route::FALLBACK.path()
    );
    println!();
}
