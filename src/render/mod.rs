//! View renderer: pure functions from page state to markup.
//!
//! ## Rendering modes
//!
//! | Route               | Body                                                   |
//! |---------------------|--------------------------------------------------------|
//! | `/`                 | Landing copy with a single call-to-action              |
//! | `/dashboard`        | Filter bar + job cards, or an empty state              |
//! | `/saved`            | Same as dashboard, restricted to saved jobs            |
//! | `/settings`         | Static preferences form (not wired up yet)             |
//! | `/digest`, `/proof` | Route empty-state placeholder                          |
//!
//! The job-detail modal and the navigation bar are rendered separately so a
//! host can update them without rebuilding the page body. All job data is
//! HTML-escaped by the templates.

pub mod views;

use askama::Template;
use jobtrack_common::{FilterState, Job};

use crate::catalog::JobCatalog;
use crate::errors::RenderError;
use crate::query;
use crate::routes::{NO_MATCHES, Route, RouteEntry};
use views::{EmptyView, FilterBarView, JobCardView, NavLinkView};

/// Everything the renderer needs to draw one page body.
pub struct PageContext<'a> {
    pub route: Route,
    pub entry: &'static RouteEntry,
    pub catalog: &'a JobCatalog,
    pub filter: &'a FilterState,
    pub saved_ids: &'a [u64],
    /// Filtered and sorted jobs for this route.
    pub derived: Vec<&'a Job>,
    /// Whether the route had anything to list before filtering.
    pub has_data: bool,
}

impl<'a> PageContext<'a> {
    pub fn new(
        route: Route,
        catalog: &'a JobCatalog,
        filter: &'a FilterState,
        saved_ids: &'a [u64],
    ) -> Self {
        let (derived, has_data) = derive_for_route(route, catalog, filter, saved_ids);
        Self {
            route,
            entry: route.entry(),
            catalog,
            filter,
            saved_ids,
            derived,
            has_data,
        }
    }
}

/// Derived job list for `route` plus whether the route has any data at all.
///
/// The saved page lists only saved jobs; every other route lists the whole
/// catalog. Filtering and sorting commute with that restriction, so the
/// saved subset is taken after the query runs.
pub fn derive_for_route<'a>(
    route: Route,
    catalog: &'a JobCatalog,
    filter: &FilterState,
    saved_ids: &[u64],
) -> (Vec<&'a Job>, bool) {
    let mut derived = query::process_jobs(catalog.jobs(), filter);
    let has_data = match route {
        Route::Saved => {
            derived.retain(|job| saved_ids.contains(&job.id));
            catalog.jobs().iter().any(|job| saved_ids.contains(&job.id))
        }
        _ => !catalog.is_empty(),
    };
    (derived, has_data)
}

#[derive(Template)]
#[template(path = "landing.html")]
struct LandingTemplate<'a> {
    headline: &'a str,
    subtext: &'a str,
    cta_text: &'a str,
    cta_href: String,
}

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    title: &'a str,
    subtitle: &'a str,
    workspace: String,
    instructions: &'a str,
    next_step: &'a str,
}

#[derive(Template)]
#[template(path = "job_list.html")]
struct JobListTemplate {
    filter_bar: FilterBarView,
    cards: Vec<JobCardView>,
    total: usize,
    empty: EmptyView,
}

#[derive(Template)]
#[template(path = "empty_state.html")]
struct EmptyStateTemplate {
    empty: EmptyView,
}

#[derive(Template)]
#[template(path = "settings.html")]
struct SettingsTemplate {}

#[derive(Template)]
#[template(path = "job_modal.html")]
struct JobModalTemplate {
    card: JobCardView,
}

#[derive(Template)]
#[template(path = "nav.html")]
struct NavTemplate {
    links: Vec<NavLinkView>,
    has_hamburger: bool,
    menu_open: bool,
}

#[derive(Template)]
#[template(path = "document.html")]
struct DocumentTemplate<'a> {
    title: &'a str,
    stylesheet: &'a str,
    nav: &'a str,
    body: &'a str,
    modal: &'a str,
}

/// Render the page body for the context's route.
pub fn render_page(ctx: &PageContext<'_>) -> Result<String, RenderError> {
    if let Some(landing) = ctx.entry.landing {
        let markup = LandingTemplate {
            headline: landing.headline,
            subtext: landing.subtext,
            cta_text: landing.cta_text,
            cta_href: landing.cta_link.fragment(),
        }
        .render()?;
        return Ok(markup);
    }

    let workspace = match ctx.route {
        Route::Dashboard | Route::Saved => render_job_list(ctx)?,
        Route::Settings => SettingsTemplate {}.render()?,
        _ => match ctx.entry.empty_state {
            Some(copy) => EmptyStateTemplate {
                empty: EmptyView::new(EmptyView::PLACEHOLDER, copy),
            }
            .render()?,
            None => String::new(),
        },
    };

    let (instructions, next_step) = panel_copy(ctx.route);
    let markup = PageTemplate {
        title: ctx.entry.title,
        subtitle: ctx.entry.subtitle,
        workspace,
        instructions,
        next_step,
    }
    .render()?;
    Ok(markup)
}

fn render_job_list(ctx: &PageContext<'_>) -> Result<String, RenderError> {
    let empty = if ctx.has_data {
        EmptyView::new(EmptyView::NO_RESULTS, NO_MATCHES)
    } else {
        let copy = ctx.entry.empty_state.unwrap_or(NO_MATCHES);
        EmptyView::new(EmptyView::NO_DATA, copy)
    };

    let cards = ctx
        .derived
        .iter()
        .map(|job| JobCardView::new(job, ctx.saved_ids.contains(&job.id)))
        .collect();

    let total = match ctx.route {
        Route::Saved => ctx
            .catalog
            .jobs()
            .iter()
            .filter(|job| ctx.saved_ids.contains(&job.id))
            .count(),
        _ => ctx.catalog.len(),
    };

    let markup = JobListTemplate {
        filter_bar: FilterBarView::new(ctx.catalog, ctx.filter),
        cards,
        total,
        empty,
    }
    .render()?;
    Ok(markup)
}

fn panel_copy(route: Route) -> (&'static str, &'static str) {
    match route {
        Route::Dashboard => (
            "Filter the live dataset by keyword, location, mode, experience or source. Use View for details and Save to keep a job for later.",
            "Save the jobs worth revisiting",
        ),
        Route::Saved => (
            "Jobs you saved are stored on this device and survive reloads. Filters apply here too.",
            "Review saved jobs and apply",
        ),
        Route::Settings => (
            "Preferences are shown for layout only. Matching logic is not implemented yet.",
            "Wire preferences into matching",
        ),
        _ => (
            "This page is a placeholder. Navigation and layout are fully functional.",
            "Implement this page's dataset",
        ),
    }
}

/// Render the detail modal for a single job.
pub fn render_job_modal(job: &Job, saved: bool) -> Result<String, RenderError> {
    let markup = JobModalTemplate {
        card: JobCardView::new(job, saved),
    }
    .render()?;
    Ok(markup)
}

/// Render the top navigation with `active` highlighted.
pub fn render_nav(
    active: Option<Route>,
    has_hamburger: bool,
    menu_open: bool,
) -> Result<String, RenderError> {
    let markup = NavTemplate {
        links: NavLinkView::for_routes(active),
        has_hamburger,
        menu_open,
    }
    .render()?;
    Ok(markup)
}

/// Wrap rendered fragments into a standalone HTML document.
pub fn render_document(
    title: &str,
    nav: &str,
    body: &str,
    modal: &str,
    stylesheet: &str,
) -> Result<String, RenderError> {
    let markup = DocumentTemplate {
        title,
        stylesheet,
        nav,
        body,
        modal,
    }
    .render()?;
    Ok(markup)
}
