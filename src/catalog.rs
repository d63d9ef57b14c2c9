//! The job dataset: an ordered, read-only collection supplied at startup.

use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use jobtrack_common::{FilterField, Job};

use crate::assets;
use crate::errors::CatalogError;

/// Validated job collection. Ids are unique; input order is preserved.
#[derive(Debug, Clone, Default)]
pub struct JobCatalog {
    jobs: Vec<Job>,
}

impl JobCatalog {
    pub fn new(jobs: Vec<Job>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(jobs.len());
        for job in &jobs {
            if !seen.insert(job.id) {
                return Err(CatalogError::DuplicateId { id: job.id });
            }
        }
        Ok(Self { jobs })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a JSON array of jobs.
    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        let jobs: Vec<Job> = serde_json::from_str(content).map_err(CatalogError::Parse)?;
        Self::new(jobs)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&content)?;
        tracing::debug!(path = %path.display(), jobs = catalog.len(), "Loaded job dataset");
        Ok(catalog)
    }

    /// The sample dataset embedded in the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        let content = assets::text(assets::SAMPLE_JOBS)
            .ok_or_else(|| CatalogError::MissingAsset(assets::SAMPLE_JOBS.to_string()))?;
        Self::from_json(&content)
    }

    /// Load from `path` when given, otherwise fall back to the bundled sample.
    pub fn load_or_bundled(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::load(path),
            None => Self::bundled(),
        }
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn get(&self, id: u64) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Sorted distinct values of a filterable field, for filter selects.
    pub fn distinct(&self, field: FilterField) -> Vec<String> {
        self.jobs
            .iter()
            .filter_map(|job| job.field(field))
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
