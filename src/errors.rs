//! Typed error hierarchy for the tracker.
//!
//! Three enums cover the three places where something can genuinely fail:
//! - `CatalogError`: loading and validating the job dataset
//! - `StorageError`: reading or writing the persisted key-value blob
//! - `RenderError`: template rendering
//!
//! `TrackerError` aggregates them for callers that drive the whole page.
//! Soft failures (unknown routes, corrupt saved data, missing affordances)
//! are handled in place and never show up here.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading the job dataset.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read job dataset at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse job dataset: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Duplicate job id {id} in dataset")]
    DuplicateId { id: u64 },

    #[error("Bundled dataset '{0}' is missing from the binary")]
    MissingAsset(String),
}

/// Errors from the persisted key-value store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read storage file at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write storage file at {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize storage value: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Errors from rendering markup.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template rendering failed: {0}")]
    Template(#[from] askama::Error),
}

/// Top-level error for operations that touch several subsystems.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_error_read_carries_path() {
        let path = PathBuf::from("/data/jobs.json");
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = CatalogError::Read {
            path: path.clone(),
            source: io_err,
        };
        match &err {
            CatalogError::Read { path: p, source } => {
                assert_eq!(p, &path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            _ => panic!("Expected Read variant"),
        }
        assert!(err.to_string().contains("/data/jobs.json"));
    }

    #[test]
    fn catalog_error_duplicate_id_carries_id() {
        let err = CatalogError::DuplicateId { id: 42 };
        assert!(matches!(err, CatalogError::DuplicateId { id: 42 }));
        assert!(err.to_string().contains("42"));
    }

    #[test]
    fn storage_error_converts_into_tracker_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let inner = StorageError::Write {
            path: PathBuf::from("/tmp/storage.json"),
            source: io_err,
        };
        let err: TrackerError = inner.into();
        match &err {
            TrackerError::Storage(StorageError::Write { path, .. }) => {
                assert_eq!(path, &PathBuf::from("/tmp/storage.json"));
            }
            _ => panic!("Expected TrackerError::Storage(Write)"),
        }
    }

    #[test]
    fn all_error_types_implement_std_error_trait() {
        fn assert_std_error<E: std::error::Error>(_: &E) {}
        assert_std_error(&CatalogError::DuplicateId { id: 1 });
        assert_std_error(&CatalogError::MissingAsset("jobs.json".into()));
        let tracker_err: TrackerError = anyhow::anyhow!("boom").into();
        assert_std_error(&tracker_err);
    }
}
