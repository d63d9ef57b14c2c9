//! Static route table mapping fragment paths to page metadata.
//!
//! The table is fixed for the lifetime of the process. Unknown paths are
//! never an error: [`resolve`] turns them into a redirect to the dashboard.

use std::fmt;

/// Logical page identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    Dashboard,
    Saved,
    Digest,
    Settings,
    Proof,
}

impl Route {
    /// Route used for unknown or unset paths.
    pub const FALLBACK: Route = Route::Dashboard;

    pub fn path(&self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Dashboard => "/dashboard",
            Self::Saved => "/saved",
            Self::Digest => "/digest",
            Self::Settings => "/settings",
            Self::Proof => "/proof",
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        match path {
            "/" => Some(Self::Landing),
            "/dashboard" => Some(Self::Dashboard),
            "/saved" => Some(Self::Saved),
            "/digest" => Some(Self::Digest),
            "/settings" => Some(Self::Settings),
            "/proof" => Some(Self::Proof),
            _ => None,
        }
    }

    /// Routes linked from the top navigation, in display order.
    pub fn nav_routes() -> [Route; 5] {
        [
            Self::Dashboard,
            Self::Saved,
            Self::Digest,
            Self::Settings,
            Self::Proof,
        ]
    }

    /// Whether the page body depends on the filter state.
    pub fn is_job_list(&self) -> bool {
        matches!(self, Self::Dashboard | Self::Saved)
    }

    /// Location fragment for this route, e.g. `#/saved`.
    pub fn fragment(&self) -> String {
        format!("#{}", self.path())
    }

    pub fn entry(&self) -> &'static RouteEntry {
        // ROUTES is declared in variant order.
        &ROUTES[*self as usize]
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Copy shown when a page has nothing to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyState {
    pub title: &'static str,
    pub message: &'static str,
}

/// Promotional copy for the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandingCopy {
    pub headline: &'static str,
    pub subtext: &'static str,
    pub cta_text: &'static str,
    pub cta_link: Route,
}

/// Display metadata for one route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub route: Route,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub empty_state: Option<EmptyState>,
    pub landing: Option<LandingCopy>,
}

pub static ROUTES: [RouteEntry; 6] = [
    RouteEntry {
        route: Route::Landing,
        title: "Home",
        subtitle: "",
        empty_state: None,
        landing: Some(LandingCopy {
            headline: "Stop Missing The Right Jobs.",
            subtext: "Precision-matched job discovery delivered daily at 9AM.",
            cta_text: "Start Tracking",
            cta_link: Route::Settings,
        }),
    },
    RouteEntry {
        route: Route::Dashboard,
        title: "Dashboard",
        subtitle: "Manage and track your job applications and notifications.",
        empty_state: Some(EmptyState {
            title: "No jobs yet",
            message: "In the next step, you will load a realistic dataset.",
        }),
        landing: None,
    },
    RouteEntry {
        route: Route::Saved,
        title: "Saved Jobs",
        subtitle: "View and manage jobs you have marked as interesting.",
        empty_state: Some(EmptyState {
            title: "No saved jobs",
            message: "Your saved jobs will appear here for easy access.",
        }),
        landing: None,
    },
    RouteEntry {
        route: Route::Digest,
        title: "Daily Digest",
        subtitle: "Summarized job listings from the last 24 hours.",
        empty_state: Some(EmptyState {
            title: "Digest is empty",
            message: "Check back tomorrow at 9AM for your next precision-matched digest.",
        }),
        landing: None,
    },
    RouteEntry {
        route: Route::Settings,
        title: "Settings",
        subtitle: "Configure your job search filters and notification preferences.",
        empty_state: None,
        landing: None,
    },
    RouteEntry {
        route: Route::Proof,
        title: "Proof of Work",
        subtitle: "Artifact collection for project verification.",
        empty_state: Some(EmptyState {
            title: "No artifacts yet",
            message: "This page will house your project artifacts and completion evidence.",
        }),
        landing: None,
    },
];

/// Copy shown when data exists but the current filters match nothing.
pub const NO_MATCHES: EmptyState = EmptyState {
    title: "No matching jobs",
    message: "No jobs match your current filters. Try adjusting your search.",
};

/// Outcome of resolving a path against the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Render(Route),
    Redirect(Route),
}

impl Resolution {
    /// The route that ends up on screen either way.
    pub fn route(&self) -> Route {
        match self {
            Self::Render(route) | Self::Redirect(route) => *route,
        }
    }
}

/// Metadata for `path`, or `None` if the table has no such entry.
pub fn lookup(path: &str) -> Option<&'static RouteEntry> {
    Route::from_path(path).map(|route| route.entry())
}

/// Resolve a path, redirecting unknown ones to the fallback route.
pub fn resolve(path: &str) -> Resolution {
    match Route::from_path(path) {
        Some(route) => Resolution::Render(route),
        None => Resolution::Redirect(Route::FALLBACK),
    }
}

/// Extract the path from a location fragment (`#/saved` → `/saved`).
///
/// Returns `None` when the fragment is absent or empty.
pub fn path_from_fragment(fragment: Option<&str>) -> Option<String> {
    let raw = fragment?.trim();
    let path = raw.strip_prefix('#').unwrap_or(raw);
    if path.is_empty() {
        None
    } else {
        Some(path.to_string())
    }
}
