//! Navigation controller: the page's event loop in one struct.
//!
//! The controller owns every piece of mutable page state (current route,
//! filter state, chrome, open modal) and the saved-job store. Each
//! [`UiEvent`] is handled synchronously: state is mutated, derived data is
//! recomputed and the affected markup is written wholesale to the
//! [`DisplaySurface`].
//!
//! ```text
//! RouteChanged ──> resolve ──> render body ──> mount ──> nav highlight,
//!                                                       close menu, scroll top
//! FilterChanged / SortChanged ──> mutate FilterState ──> re-render body
//!                                 (dashboard/saved only, route kept)
//! ToggleSave ──> read-modify-write saved set ──> re-render body (+ modal)
//! OpenModal / CloseModal ──> show / hide modal
//! ToggleMobileMenu ──> flip menu (skipped without a hamburger)
//! ```

use jobtrack_common::{FilterField, FilterState, Job, SortMode};
use serde::{Deserialize, Serialize};

use crate::catalog::JobCatalog;
use crate::errors::TrackerError;
use crate::render::{self, PageContext};
use crate::routes::{self, Resolution, Route};
use crate::saved::SavedJobs;
use crate::storage::KeyValueStore;

/// Input events from the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum UiEvent {
    /// The location fragment changed (or the page just loaded).
    RouteChanged {
        #[serde(default)]
        fragment: Option<String>,
    },
    FilterChanged {
        field: FilterField,
        #[serde(default)]
        value: String,
    },
    SortChanged {
        sort: SortMode,
    },
    ToggleSave {
        id: u64,
    },
    OpenModal {
        id: u64,
    },
    CloseModal,
    ToggleMobileMenu,
}

/// Where rendered markup ends up.
pub trait DisplaySurface {
    /// Replace the page body.
    fn mount(&mut self, markup: String);
    /// Replace the navigation bar.
    fn mount_nav(&mut self, markup: String);
    fn show_modal(&mut self, markup: String);
    fn hide_modal(&mut self);
    fn scroll_to_top(&mut self);
}

/// In-memory surface that keeps the latest markup.
#[derive(Debug, Clone, Default)]
pub struct BufferSurface {
    pub body: String,
    pub nav: String,
    pub modal: Option<String>,
    pub mounts: usize,
    pub scroll_resets: usize,
}

impl DisplaySurface for BufferSurface {
    fn mount(&mut self, markup: String) {
        self.body = markup;
        self.mounts += 1;
    }

    fn mount_nav(&mut self, markup: String) {
        self.nav = markup;
    }

    fn show_modal(&mut self, markup: String) {
        self.modal = Some(markup);
    }

    fn hide_modal(&mut self) {
        self.modal = None;
    }

    fn scroll_to_top(&mut self) {
        self.scroll_resets += 1;
    }
}

/// Page chrome outside the route body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chrome {
    /// Route whose nav link is highlighted. `None` on pages without a link.
    pub active_nav: Option<Route>,
    /// `None` when the page has no hamburger affordance.
    pub mobile_menu_open: Option<bool>,
}

impl Chrome {
    pub fn new(has_hamburger: bool) -> Self {
        Self {
            active_nav: None,
            mobile_menu_open: has_hamburger.then_some(false),
        }
    }

    pub fn has_hamburger(&self) -> bool {
        self.mobile_menu_open.is_some()
    }

    pub fn menu_open(&self) -> bool {
        self.mobile_menu_open.unwrap_or(false)
    }
}

pub struct NavigationController<S, D> {
    catalog: JobCatalog,
    filter: FilterState,
    saved: SavedJobs<S>,
    surface: D,
    chrome: Chrome,
    route: Route,
    fragment: Option<String>,
    modal: Option<u64>,
}

impl<S: KeyValueStore, D: DisplaySurface> NavigationController<S, D> {
    pub fn new(catalog: JobCatalog, saved: SavedJobs<S>, surface: D) -> Self {
        Self {
            catalog,
            filter: FilterState::default(),
            saved,
            surface,
            chrome: Chrome::new(true),
            route: Route::FALLBACK,
            fragment: None,
            modal: None,
        }
    }

    /// Drop the hamburger affordance; menu operations become no-ops.
    pub fn without_hamburger(mut self) -> Self {
        self.chrome = Chrome::new(false);
        self
    }

    pub fn with_filter(mut self, filter: FilterState) -> Self {
        self.filter = filter;
        self
    }

    /// Initial render for the host's current location fragment.
    pub fn start(&mut self, fragment: Option<&str>) -> Result<(), TrackerError> {
        self.handle(UiEvent::RouteChanged {
            fragment: fragment.map(str::to_string),
        })
    }

    pub fn handle(&mut self, event: UiEvent) -> Result<(), TrackerError> {
        tracing::debug!(?event, route = %self.route, "Handling UI event");
        match event {
            UiEvent::RouteChanged { fragment } => self.navigate(fragment.as_deref()),
            UiEvent::FilterChanged { field, value } => {
                self.filter.set(field, value);
                self.refresh_job_list()
            }
            UiEvent::SortChanged { sort } => {
                self.filter.sort = sort;
                self.refresh_job_list()
            }
            UiEvent::ToggleSave { id } => self.toggle_save(id),
            UiEvent::OpenModal { id } => self.open_modal(id),
            UiEvent::CloseModal => {
                self.modal = None;
                self.surface.hide_modal();
                Ok(())
            }
            UiEvent::ToggleMobileMenu => {
                match self.chrome.mobile_menu_open.as_mut() {
                    Some(open) => *open = !*open,
                    None => return Ok(()),
                }
                self.render_nav()
            }
        }
    }

    fn navigate(&mut self, fragment: Option<&str>) -> Result<(), TrackerError> {
        let resolution = match routes::path_from_fragment(fragment) {
            Some(path) => routes::resolve(&path),
            None => Resolution::Redirect(Route::FALLBACK),
        };

        if let Resolution::Redirect(target) = resolution {
            tracing::info!(requested = ?fragment, target = %target, "Redirecting route");
        }

        let route = resolution.route();
        self.route = route;
        self.fragment = Some(route.fragment());
        self.render_body()?;

        self.chrome.active_nav = Route::nav_routes().contains(&route).then_some(route);
        if let Some(open) = self.chrome.mobile_menu_open.as_mut() {
            *open = false;
        }
        self.render_nav()?;
        self.surface.scroll_to_top();
        tracing::debug!(route = %route, "Rendered route");
        Ok(())
    }

    fn refresh_job_list(&mut self) -> Result<(), TrackerError> {
        if self.route.is_job_list() {
            self.render_body()?;
        }
        Ok(())
    }

    fn toggle_save(&mut self, id: u64) -> Result<(), TrackerError> {
        self.saved.toggle(id)?;
        self.render_body()?;
        if self.modal == Some(id) {
            self.open_modal(id)?;
        }
        Ok(())
    }

    fn open_modal(&mut self, id: u64) -> Result<(), TrackerError> {
        let Some(job) = self.catalog.get(id) else {
            tracing::debug!(job_id = id, "Ignoring modal request for unknown job");
            return Ok(());
        };
        let markup = render::render_job_modal(job, self.saved.is_saved(id))?;
        self.modal = Some(id);
        self.surface.show_modal(markup);
        Ok(())
    }

    fn render_body(&mut self) -> Result<(), TrackerError> {
        let saved_ids = self.saved.ids();
        let ctx = PageContext::new(self.route, &self.catalog, &self.filter, &saved_ids);
        let markup = render::render_page(&ctx)?;
        self.surface.mount(markup);
        Ok(())
    }

    fn render_nav(&mut self) -> Result<(), TrackerError> {
        let markup = render::render_nav(
            self.chrome.active_nav,
            self.chrome.has_hamburger(),
            self.chrome.menu_open(),
        )?;
        self.surface.mount_nav(markup);
        Ok(())
    }

    pub fn current_route(&self) -> Route {
        self.route
    }

    /// Location fragment after any redirect, e.g. `#/dashboard`.
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn chrome(&self) -> &Chrome {
        &self.chrome
    }

    pub fn open_modal_id(&self) -> Option<u64> {
        self.modal
    }

    pub fn catalog(&self) -> &JobCatalog {
        &self.catalog
    }

    pub fn saved(&self) -> &SavedJobs<S> {
        &self.saved
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    pub fn into_surface(self) -> D {
        self.surface
    }

    /// Jobs currently listed for the active route.
    pub fn derived_jobs(&self) -> Vec<&Job> {
        if !self.route.is_job_list() {
            return Vec::new();
        }
        let saved_ids = self.saved.ids();
        render::derive_for_route(self.route, &self.catalog, &self.filter, &saved_ids).0
    }
}
