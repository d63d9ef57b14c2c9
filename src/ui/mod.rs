//! Terminal presentation helpers for the CLI host.
//!
//! The HTML renderer in `render` is the primary output; these helpers give
//! the same derived data a plain-text shape for `jobtrack jobs`,
//! `jobtrack show` and the interactive session.

pub mod icons;

use console::style;
use jobtrack_common::Job;

use icons::{SAVED, UNSAVED};

/// Fallback width when the terminal size cannot be determined.
const DEFAULT_WIDTH: usize = 80;

/// Current terminal width, or 80 columns when not attached to a terminal.
pub fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| w as usize)
        .unwrap_or(DEFAULT_WIDTH)
}

/// One row per job: saved marker, id, title, company, location, mode, posted.
pub fn job_table(jobs: &[&Job], saved_ids: &[u64]) -> Vec<String> {
    let mut lines = Vec::with_capacity(jobs.len() + 2);
    lines.push(format!(
        "   {:<4} {:<30} {:<18} {:<12} {:<8} Posted",
        "Id", "Title", "Company", "Location", "Mode"
    ));
    lines.push(format!(
        "   {:<4} {:<30} {:<18} {:<12} {:<8} ------",
        "----", "-----", "-------", "--------", "----"
    ));
    for job in jobs {
        let marker = if saved_ids.contains(&job.id) {
            style(SAVED.to_string()).yellow().to_string()
        } else {
            UNSAVED.to_string()
        };
        lines.push(format!(
            "{:<2} {:<4} {:<30} {:<18} {:<12} {:<8} {}",
            marker,
            job.id,
            truncate(&job.title, 30),
            truncate(&job.company, 18),
            truncate(&job.location, 12),
            truncate(&job.mode, 8),
            job.posted_label()
        ));
    }
    lines
}

/// Multi-line job detail wrapped to `width` columns.
pub fn job_detail(job: &Job, saved: bool, width: usize) -> String {
    let width = width.max(20);
    let mut out = String::new();
    out.push_str(&format!("{}\n", style(&job.title).bold()));
    out.push_str(&format!("{}\n", job.company));
    out.push_str(&format!(
        "{} · {} · {}\n",
        job.location, job.mode, job.experience
    ));
    out.push_str(&format!(
        "{} · {} · {}\n",
        job.salary_range,
        job.source,
        job.posted_label()
    ));
    out.push('\n');
    for line in textwrap::wrap(&job.description, width) {
        out.push_str(&line);
        out.push('\n');
    }
    if !job.skills.is_empty() {
        out.push('\n');
        let skills = format!("Skills: {}", job.skills.join(", "));
        for line in textwrap::wrap(&skills, width) {
            out.push_str(&line);
            out.push('\n');
        }
    }
    out.push('\n');
    out.push_str(&format!("Apply: {}\n", job.apply_url));
    out.push_str(if saved { "Saved: yes\n" } else { "Saved: no\n" });
    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job() -> Job {
        Job {
            id: 12,
            title: "A very long job title that will not fit the column".to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            mode: "Remote".to_string(),
            experience: "Fresher".to_string(),
            source: "LinkedIn".to_string(),
            salary_range: "4-6 LPA".to_string(),
            description: "word ".repeat(40),
            apply_url: "https://example.com/12".to_string(),
            skills: vec!["Rust".to_string(), "Go".to_string()],
            posted_days_ago: 0,
        }
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdef", 4), "abc…");
    }

    #[test]
    fn test_job_table_has_header_and_rows() {
        let j = job();
        let lines = job_table(&[&j], &[]);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Title"));
        assert!(lines[2].contains("12"));
        assert!(lines[2].contains("Today"));
    }

    #[test]
    fn test_job_detail_wraps_description() {
        let detail = job_detail(&job(), true, 30);
        assert!(detail.lines().all(|l| console::measure_text_width(l) <= 60));
        assert!(detail.contains("Skills: Rust, Go"));
        assert!(detail.contains("Saved: yes"));
    }
}
