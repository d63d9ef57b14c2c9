//! Job query engine: derives the filtered, sorted view of the catalog.
//!
//! Both functions are pure. The derived list borrows from the input slice
//! and is recomputed on every render.

use jobtrack_common::{FilterField, FilterState, Job, SortMode};

/// True when `job` satisfies every non-empty constraint in `filter`.
///
/// The keyword matches case-insensitively against title or company; the
/// remaining fields require exact equality.
pub fn matches(job: &Job, filter: &FilterState) -> bool {
    if !filter.keyword.is_empty() {
        let needle = filter.keyword.to_lowercase();
        let hit = job.title.to_lowercase().contains(&needle)
            || job.company.to_lowercase().contains(&needle);
        if !hit {
            return false;
        }
    }

    [
        FilterField::Location,
        FilterField::Mode,
        FilterField::Experience,
        FilterField::Source,
    ]
    .into_iter()
    .all(|field| {
        let wanted = filter.get(field);
        wanted.is_empty() || job.field(field) == Some(wanted)
    })
}

/// Filter `jobs` by `filter` and order them by `filter.sort`.
///
/// Sorting is stable, so jobs with equal keys keep their catalog order.
pub fn process_jobs<'a>(jobs: &'a [Job], filter: &FilterState) -> Vec<&'a Job> {
    let mut derived: Vec<&Job> = jobs.iter().filter(|job| matches(job, filter)).collect();

    match filter.sort {
        SortMode::Latest => derived.sort_by_key(|job| job.posted_days_ago),
        // Placeholder ranking: newest id first.
        SortMode::Featured => derived.sort_by(|a, b| b.id.cmp(&a.id)),
    }

    derived
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::job;

    fn ids(jobs: &[&Job]) -> Vec<u64> {
        jobs.iter().map(|j| j.id).collect()
    }

    fn dataset() -> Vec<Job> {
        let mut a = job(1, "Frontend Developer", "Infosys", 3);
        a.mode = "Hybrid".to_string();
        let mut b = job(2, "Backend Engineer", "Razorpay", 0);
        b.location = "Pune".to_string();
        let mut c = job(3, "Data Analyst", "Flipkart", 3);
        c.source = "Naukri".to_string();
        let d = job(4, "Rust Engineer", "Frontier Labs", 1);
        vec![a, b, c, d]
    }

    #[test]
    fn test_unconstrained_returns_everything_sorted_latest() {
        let jobs = dataset();
        let derived = process_jobs(&jobs, &FilterState::default());
        assert_eq!(ids(&derived), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_latest_is_stable_for_equal_days() {
        let jobs = dataset();
        let derived = process_jobs(&jobs, &FilterState::default());
        // Jobs 1 and 3 were both posted 3 days ago; catalog order wins.
        let pos1 = derived.iter().position(|j| j.id == 1).unwrap();
        let pos3 = derived.iter().position(|j| j.id == 3).unwrap();
        assert!(pos1 < pos3);
    }

    #[test]
    fn test_featured_sorts_by_descending_id() {
        let jobs = dataset();
        let filter = FilterState::default().with_sort(SortMode::Featured);
        assert_eq!(ids(&process_jobs(&jobs, &filter)), vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_keyword_matches_title_or_company_case_insensitive() {
        let jobs = dataset();
        let filter = FilterState::default().with(FilterField::Keyword, "FRONT");
        // "Frontend Developer" by title, "Frontier Labs" by company.
        assert_eq!(ids(&process_jobs(&jobs, &filter)), vec![4, 1]);
    }

    #[test]
    fn test_keyword_does_not_match_description() {
        let jobs = dataset();
        let filter = FilterState::default().with(FilterField::Keyword, "Rust");
        let derived = process_jobs(&jobs, &filter);
        assert_eq!(ids(&derived), vec![4]);
    }

    #[test]
    fn test_exact_field_constraints_combine() {
        let jobs = dataset();
        let filter = FilterState::default()
            .with(FilterField::Location, "Bangalore")
            .with(FilterField::Source, "LinkedIn");
        assert_eq!(ids(&process_jobs(&jobs, &filter)), vec![4, 1]);

        let filter = filter.with(FilterField::Mode, "Hybrid");
        assert_eq!(ids(&process_jobs(&jobs, &filter)), vec![1]);
    }

    #[test]
    fn test_field_constraints_are_case_sensitive() {
        let jobs = dataset();
        let filter = FilterState::default().with(FilterField::Location, "pune");
        assert!(process_jobs(&jobs, &filter).is_empty());
    }

    #[test]
    fn test_no_match_yields_empty() {
        let jobs = dataset();
        let filter = FilterState::default().with(FilterField::Keyword, "zzz-no-match");
        assert!(process_jobs(&jobs, &filter).is_empty());
    }

    #[test]
    fn test_every_result_satisfies_every_constraint() {
        let jobs = dataset();
        let filters = [
            FilterState::default().with(FilterField::Keyword, "e"),
            FilterState::default().with(FilterField::Mode, "Remote"),
            FilterState::default()
                .with(FilterField::Experience, "1-3")
                .with_sort(SortMode::Featured),
            FilterState::default().with(FilterField::Source, "Naukri"),
        ];
        for filter in &filters {
            let derived = process_jobs(&jobs, filter);
            for job in &derived {
                assert!(matches(job, filter));
            }
            let expected = jobs.iter().filter(|j| matches(j, filter)).count();
            assert_eq!(derived.len(), expected);
        }
    }

    #[test]
    fn test_sort_monotonicity() {
        let jobs = dataset();
        let latest = process_jobs(&jobs, &FilterState::default());
        assert!(
            latest
                .windows(2)
                .all(|w| w[0].posted_days_ago <= w[1].posted_days_ago)
        );

        let featured =
            process_jobs(&jobs, &FilterState::default().with_sort(SortMode::Featured));
        assert!(featured.windows(2).all(|w| w[0].id >= w[1].id));
    }

    #[test]
    fn test_empty_input() {
        assert!(process_jobs(&[], &FilterState::default()).is_empty());
    }
}
