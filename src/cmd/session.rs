//! Interactive browsing session: `jobtrack session`.
//!
//! Drives the same controller as `render` and `replay`, one prompt at a
//! time. Saved-job changes are written to the storage file immediately.

use anyhow::Result;
use console::style;
use dialoguer::{Input, Select, theme::ColorfulTheme};
use std::path::Path;

use jobtrack::controller::{BufferSurface, NavigationController, UiEvent};
use jobtrack::routes::Route;
use jobtrack::storage::KeyValueStore;
use jobtrack::ui::{self, icons};
use jobtrack::{FilterField, SortMode};

use super::super::Cli;
use super::{controller, open_tracker};

const ACTIONS: &[&str] = &[
    "Navigate",
    "Filter",
    "Sort",
    "Toggle save",
    "View job",
    "Close job",
    "Print page markup",
    "Quit",
];

pub fn cmd_session(project_dir: &Path, cli: &Cli) -> Result<()> {
    let tracker = open_tracker(project_dir, cli)?;
    let hamburger = tracker.config.hamburger;
    let mut controller = controller(tracker.catalog, tracker.saved, hamburger);
    controller.start(None)?;

    let theme = ColorfulTheme::default();
    loop {
        print_state(&controller);

        let action = Select::with_theme(&theme)
            .with_prompt("Action")
            .items(ACTIONS)
            .default(0)
            .interact()?;

        let event = match action {
            0 => {
                let routes = Route::nav_routes();
                let labels: Vec<&str> = routes.iter().map(|r| r.entry().title).collect();
                let choice = Select::with_theme(&theme)
                    .with_prompt("Go to")
                    .items(&labels)
                    .default(0)
                    .interact()?;
                UiEvent::RouteChanged {
                    fragment: Some(routes[choice].fragment()),
                }
            }
            1 => {
                let labels: Vec<&str> = FilterField::ALL.iter().map(|f| f.label()).collect();
                let choice = Select::with_theme(&theme)
                    .with_prompt("Filter by")
                    .items(&labels)
                    .default(0)
                    .interact()?;
                let field = FilterField::ALL[choice];
                let value: String = Input::with_theme(&theme)
                    .with_prompt(format!("{} (empty clears)", field.label()))
                    .allow_empty(true)
                    .with_initial_text(controller.filter().get(field))
                    .interact_text()?;
                UiEvent::FilterChanged {
                    field,
                    value: value.trim().to_string(),
                }
            }
            2 => {
                let labels: Vec<&str> = SortMode::ALL.iter().map(|s| s.label()).collect();
                let choice = Select::with_theme(&theme)
                    .with_prompt("Sort by")
                    .items(&labels)
                    .default(0)
                    .interact()?;
                UiEvent::SortChanged {
                    sort: SortMode::ALL[choice],
                }
            }
            3 => match prompt_job_id(&theme, &controller)? {
                Some(id) => UiEvent::ToggleSave { id },
                None => continue,
            },
            4 => match prompt_job_id(&theme, &controller)? {
                Some(id) => UiEvent::OpenModal { id },
                None => continue,
            },
            5 => UiEvent::CloseModal,
            6 => {
                println!("{}", controller.surface().body);
                if let Some(modal) = &controller.surface().modal {
                    println!("{}", modal);
                }
                continue;
            }
            _ => break,
        };

        controller.handle(event)?;
    }

    println!("{}Session ended", icons::CHECK);
    Ok(())
}

fn print_state<S: KeyValueStore>(controller: &NavigationController<S, BufferSurface>) {
    let route = controller.current_route();
    let entry = route.entry();
    println!();
    println!("{} {}", style(entry.title).bold(), style(entry.subtitle).dim());

    if route.is_job_list() {
        let filter = controller.filter();
        let active: Vec<String> = filter
            .active_fields()
            .into_iter()
            .map(|field| format!("{}={}", field, filter.get(field)))
            .collect();
        if !active.is_empty() {
            println!("Filters: {}", active.join(", "));
        }
        println!("Sort: {}", filter.sort.label());

        let saved_ids = controller.saved().ids();
        let jobs = controller.derived_jobs();
        if jobs.is_empty() {
            println!("{}", style("No jobs to show").yellow());
        }
        for line in ui::job_table(&jobs, &saved_ids) {
            println!("{}", line);
        }
    }

    if let Some(id) = controller.open_modal_id()
        && let Some(job) = controller.catalog().get(id)
    {
        println!();
        print!(
            "{}",
            ui::job_detail(job, controller.saved().is_saved(id), ui::terminal_width())
        );
    }
    println!();
}

fn prompt_job_id<S: KeyValueStore>(
    theme: &ColorfulTheme,
    controller: &NavigationController<S, BufferSurface>,
) -> Result<Option<u64>> {
    let id: u64 = Input::with_theme(theme).with_prompt("Job id").interact_text()?;
    if controller.catalog().get(id).is_none() {
        println!("{}No job with id {}", icons::CROSS, id);
        return Ok(None);
    }
    Ok(Some(id))
}
