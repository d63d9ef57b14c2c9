//! Flat view models handed to the templates.
//!
//! Templates only loop and branch on booleans; every decision about what
//! to show is made here.

use jobtrack_common::{FilterField, FilterState, Job, SortMode};

use crate::catalog::JobCatalog;
use crate::routes::{EmptyState, Route};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyView {
    pub kind: &'static str,
    pub title: &'static str,
    pub message: &'static str,
}

impl EmptyView {
    pub const NO_DATA: &'static str = "no-data";
    pub const NO_RESULTS: &'static str = "no-results";
    pub const PLACEHOLDER: &'static str = "placeholder";

    pub fn new(kind: &'static str, copy: EmptyState) -> Self {
        Self {
            kind,
            title: copy.title,
            message: copy.message,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OptionView {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone)]
pub struct SelectView {
    pub name: &'static str,
    pub label: &'static str,
    pub options: Vec<OptionView>,
}

#[derive(Debug, Clone)]
pub struct FilterBarView {
    pub keyword: String,
    pub selects: Vec<SelectView>,
    pub sort_options: Vec<OptionView>,
}

impl FilterBarView {
    /// Build the filter bar for `catalog`, reflecting the current `filter`.
    ///
    /// A constraint whose value is absent from the dataset is still offered
    /// as a selected option so the bar never silently drops it.
    pub fn new(catalog: &JobCatalog, filter: &FilterState) -> Self {
        let selects = [
            FilterField::Location,
            FilterField::Mode,
            FilterField::Experience,
            FilterField::Source,
        ]
        .into_iter()
        .map(|field| {
            let current = filter.get(field);
            let mut values = catalog.distinct(field);
            if !current.is_empty() && !values.iter().any(|v| v == current) {
                values.push(current.to_string());
            }
            SelectView {
                name: field.as_str(),
                label: field.label(),
                options: values
                    .into_iter()
                    .map(|value| OptionView {
                        selected: value == current,
                        label: value.clone(),
                        value,
                    })
                    .collect(),
            }
        })
        .collect();

        let sort_options = SortMode::ALL
            .into_iter()
            .map(|mode| OptionView {
                value: mode.as_str().to_string(),
                label: mode.label().to_string(),
                selected: mode == filter.sort,
            })
            .collect();

        Self {
            keyword: filter.keyword.clone(),
            selects,
            sort_options,
        }
    }
}

#[derive(Debug, Clone)]
pub struct JobCardView {
    pub id: u64,
    pub title: String,
    pub company: String,
    pub location: String,
    pub mode: String,
    pub experience: String,
    pub source: String,
    pub salary_range: String,
    pub description: String,
    pub apply_url: String,
    pub skills: Vec<String>,
    pub posted: String,
    pub saved: bool,
}

impl JobCardView {
    pub fn new(job: &Job, saved: bool) -> Self {
        Self {
            id: job.id,
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            mode: job.mode.clone(),
            experience: job.experience.clone(),
            source: job.source.clone(),
            salary_range: job.salary_range.clone(),
            description: job.description.clone(),
            apply_url: job.apply_url.clone(),
            skills: job.skills.clone(),
            posted: job.posted_label(),
            saved,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NavLinkView {
    pub href: String,
    pub path: &'static str,
    pub label: &'static str,
    pub active: bool,
}

impl NavLinkView {
    pub fn for_routes(active: Option<Route>) -> Vec<Self> {
        Route::nav_routes()
            .into_iter()
            .map(|route| NavLinkView {
                href: route.fragment(),
                path: route.path(),
                label: nav_label(route),
                active: Some(route) == active,
            })
            .collect()
    }
}

fn nav_label(route: Route) -> &'static str {
    match route {
        Route::Landing => "Home",
        Route::Dashboard => "Dashboard",
        Route::Saved => "Saved",
        Route::Digest => "Digest",
        Route::Settings => "Settings",
        Route::Proof => "Proof",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::job;

    #[test]
    fn test_filter_bar_marks_selected_options() {
        let mut a = job(1, "A", "X", 0);
        a.mode = "Hybrid".to_string();
        let b = job(2, "B", "Y", 0);
        let catalog = JobCatalog::new(vec![a, b]).unwrap();
        let filter = FilterState::default()
            .with(FilterField::Mode, "Hybrid")
            .with_sort(SortMode::Featured);

        let bar = FilterBarView::new(&catalog, &filter);
        let mode = bar.selects.iter().find(|s| s.name == "mode").unwrap();
        let selected: Vec<&str> = mode
            .options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(selected, vec!["Hybrid"]);
        assert_eq!(mode.options.len(), 2);

        let sort: Vec<&str> = bar
            .sort_options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(sort, vec!["featured"]);
    }

    #[test]
    fn test_filter_bar_keeps_unknown_constraint() {
        let catalog = JobCatalog::new(vec![job(1, "A", "X", 0)]).unwrap();
        let filter = FilterState::default().with(FilterField::Location, "Atlantis");
        let bar = FilterBarView::new(&catalog, &filter);
        let location = bar.selects.iter().find(|s| s.name == "location").unwrap();
        assert!(
            location
                .options
                .iter()
                .any(|o| o.value == "Atlantis" && o.selected)
        );
    }

    #[test]
    fn test_nav_links_single_active() {
        let links = NavLinkView::for_routes(Some(Route::Saved));
        let active: Vec<&str> = links.iter().filter(|l| l.active).map(|l| l.path).collect();
        assert_eq!(active, vec!["/saved"]);

        let none = NavLinkView::for_routes(Some(Route::Landing));
        assert!(none.iter().all(|l| !l.active));
    }

    #[test]
    fn test_job_card_view_copies_fields() {
        let card = JobCardView::new(&job(3, "Dev", "Acme", 1), true);
        assert_eq!(card.id, 3);
        assert_eq!(card.posted, "1 day ago");
        assert!(card.saved);
    }
}
