//! Shared domain types for the jobtrack job board.
//!
//! These types cross every layer of the tracker: the dataset loader builds
//! [`Job`] values, the query engine reads them through a [`FilterState`], and
//! the renderer and navigation controller carry both around unchanged.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single job listing. Supplied externally and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
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
    #[serde(default)]
    pub skills: Vec<String>,
    pub posted_days_ago: u32,
}

impl Job {
    /// Value of a filterable field. `Keyword` has no single backing field.
    pub fn field(&self, field: FilterField) -> Option<&str> {
        match field {
            FilterField::Keyword => None,
            FilterField::Location => Some(&self.location),
            FilterField::Mode => Some(&self.mode),
            FilterField::Experience => Some(&self.experience),
            FilterField::Source => Some(&self.source),
        }
    }

    /// Human readable recency, e.g. "Today" or "3 days ago".
    pub fn posted_label(&self) -> String {
        match self.posted_days_ago {
            0 => "Today".to_string(),
            1 => "1 day ago".to_string(),
            n => format!("{} days ago", n),
        }
    }
}

/// Error returned when a string names no known filter field or sort mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid filter field '{0}'. Valid values: keyword, location, mode, experience, source")]
    FilterField(String),

    #[error("Invalid sort mode '{0}'. Valid values: latest, featured")]
    SortMode(String),
}

/// The user-editable fields of the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterField {
    Keyword,
    Location,
    Mode,
    Experience,
    Source,
}

impl FilterField {
    pub const ALL: [FilterField; 5] = [
        FilterField::Keyword,
        FilterField::Location,
        FilterField::Mode,
        FilterField::Experience,
        FilterField::Source,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Location => "location",
            Self::Mode => "mode",
            Self::Experience => "experience",
            Self::Source => "source",
        }
    }

    /// Label used in the filter bar.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Keyword => "Keyword",
            Self::Location => "Location",
            Self::Mode => "Mode",
            Self::Experience => "Experience",
            Self::Source => "Source",
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterField {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "keyword" => Ok(Self::Keyword),
            "location" => Ok(Self::Location),
            "mode" => Ok(Self::Mode),
            "experience" => Ok(Self::Experience),
            "source" => Ok(Self::Source),
            _ => Err(ParseError::FilterField(s.to_string())),
        }
    }
}

/// Ordering applied to the derived job list.
///
/// `Featured` orders by descending id. It is a stand-in until a real
/// ranking exists and must not be read as a salary comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    #[default]
    Latest,
    Featured,
}

impl SortMode {
    pub const ALL: [SortMode; 2] = [SortMode::Latest, SortMode::Featured];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::Featured => "featured",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Latest => "Latest",
            Self::Featured => "Featured",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "latest" => Ok(Self::Latest),
            "featured" => Ok(Self::Featured),
            _ => Err(ParseError::SortMode(s.to_string())),
        }
    }
}

/// Current filter criteria and sort order.
///
/// An empty string means "no constraint" for that field. Any string is
/// accepted as a constraint; nothing here validates input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub keyword: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub mode: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub sort: SortMode,
}

impl FilterState {
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Keyword => &self.keyword,
            FilterField::Location => &self.location,
            FilterField::Mode => &self.mode,
            FilterField::Experience => &self.experience,
            FilterField::Source => &self.source,
        }
    }

    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FilterField::Keyword => self.keyword = value,
            FilterField::Location => self.location = value,
            FilterField::Mode => self.mode = value,
            FilterField::Experience => self.experience = value,
            FilterField::Source => self.source = value,
        }
    }

    /// Builder-style variant of [`FilterState::set`].
    pub fn with(mut self, field: FilterField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    /// True when no field constrains the result.
    pub fn is_unconstrained(&self) -> bool {
        FilterField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Fields that currently constrain the result, in filter-bar order.
    pub fn active_fields(&self) -> Vec<FilterField> {
        FilterField::ALL
            .into_iter()
            .filter(|f| !self.get(*f).is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_job() -> Job {
        Job {
            id: 7,
            title: "Backend Engineer".to_string(),
            company: "Acme".to_string(),
            location: "Pune".to_string(),
            mode: "Remote".to_string(),
            experience: "1-3".to_string(),
            source: "LinkedIn".to_string(),
            salary_range: "10-15 LPA".to_string(),
            description: "Build services".to_string(),
            apply_url: "https://example.com/apply/7".to_string(),
            skills: vec!["Rust".to_string()],
            posted_days_ago: 2,
        }
    }

    #[test]
    fn test_job_deserializes_camel_case() {
        let json = r#"{
            "id": 1, "title": "SDE", "company": "Acme", "location": "Remote",
            "mode": "Remote", "experience": "Fresher", "source": "Naukri",
            "salaryRange": "3-5 LPA", "description": "d", "applyUrl": "https://a",
            "skills": ["Java"], "postedDaysAgo": 4
        }"#;
        let job: Job = serde_json::from_str(json).unwrap();
        assert_eq!(job.salary_range, "3-5 LPA");
        assert_eq!(job.apply_url, "https://a");
        assert_eq!(job.posted_days_ago, 4);
    }

    #[test]
    fn test_job_skills_default_to_empty() {
        let json = r#"{
            "id": 1, "title": "SDE", "company": "Acme", "location": "Remote",
            "mode": "Remote", "experience": "Fresher", "source": "Naukri",
            "salaryRange": "", "description": "", "applyUrl": "", "postedDaysAgo": 0
        }"#;
        let job: Job = serde_json::from_str(json).unwrap();
        assert!(job.skills.is_empty());
    }

    #[test]
    fn test_posted_label() {
        let mut job = sample_job();
        job.posted_days_ago = 0;
        assert_eq!(job.posted_label(), "Today");
        job.posted_days_ago = 1;
        assert_eq!(job.posted_label(), "1 day ago");
        job.posted_days_ago = 5;
        assert_eq!(job.posted_label(), "5 days ago");
    }

    #[test]
    fn test_job_field_lookup() {
        let job = sample_job();
        assert_eq!(job.field(FilterField::Mode), Some("Remote"));
        assert_eq!(job.field(FilterField::Source), Some("LinkedIn"));
        assert_eq!(job.field(FilterField::Keyword), None);
    }

    #[test]
    fn test_filter_field_from_str() {
        assert_eq!("Mode".parse::<FilterField>().unwrap(), FilterField::Mode);
        assert_eq!(
            "keyword".parse::<FilterField>().unwrap(),
            FilterField::Keyword
        );
        let err = "salary".parse::<FilterField>().unwrap_err();
        assert!(err.to_string().contains("salary"));
    }

    #[test]
    fn test_sort_mode_default_and_parse() {
        assert_eq!(SortMode::default(), SortMode::Latest);
        assert_eq!("FEATURED".parse::<SortMode>().unwrap(), SortMode::Featured);
        assert!("salary".parse::<SortMode>().is_err());
        assert_eq!(SortMode::Featured.to_string(), "featured");
    }

    #[test]
    fn test_filter_state_set_and_get() {
        let mut filter = FilterState::default();
        assert!(filter.is_unconstrained());

        filter.set(FilterField::Location, "Bangalore");
        assert_eq!(filter.get(FilterField::Location), "Bangalore");
        assert!(!filter.is_unconstrained());
        assert_eq!(filter.active_fields(), vec![FilterField::Location]);

        filter.set(FilterField::Location, "");
        assert!(filter.is_unconstrained());
    }

    #[test]
    fn test_filter_state_builder() {
        let filter = FilterState::default()
            .with(FilterField::Keyword, "rust")
            .with(FilterField::Mode, "Hybrid")
            .with_sort(SortMode::Featured);
        assert_eq!(filter.keyword, "rust");
        assert_eq!(filter.mode, "Hybrid");
        assert_eq!(filter.sort, SortMode::Featured);
        assert_eq!(
            filter.active_fields(),
            vec![FilterField::Keyword, FilterField::Mode]
        );
    }

    #[test]
    fn test_sort_mode_serde_lowercase() {
        let json = serde_json::to_string(&SortMode::Featured).unwrap();
        assert_eq!(json, "\"featured\"");
        let filter: FilterState = serde_json::from_str(r#"{"sort":"latest"}"#).unwrap();
        assert_eq!(filter, FilterState::default());
    }
}
