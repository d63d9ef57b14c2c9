//! Layered configuration for the tracker.
//!
//! Settings are read from `.jobtrack/jobtrack.toml` in the project
//! directory, then overridden by environment variables, then by CLI flags.
//!
//! # Configuration File Format
//!
//! ```toml
//! [data]
//! jobs = "data/jobs.json"
//!
//! [storage]
//! path = "/home/me/.local/share/jobtrack/storage.json"
//! saved_key = "jobtrack.savedJobs"
//!
//! [display]
//! hamburger = true
//! ```
//!
//! Relative paths are resolved against the project directory.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::saved::SAVED_JOBS_KEY;

/// The name of the tracker's project directory.
pub const TRACKER_DIR: &str = ".jobtrack";
pub const CONFIG_FILE: &str = "jobtrack.toml";

pub const ENV_JOBS: &str = "JOBTRACK_JOBS";
pub const ENV_STORAGE: &str = "JOBTRACK_STORAGE";

pub fn get_tracker_dir(project_dir: &Path) -> PathBuf {
    project_dir.join(TRACKER_DIR)
}

/// Job dataset location.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataSection {
    /// Path to a JSON array of jobs. Unset means the bundled sample.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jobs: Option<PathBuf>,
}

/// Persisted key-value storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSection {
    /// Storage file. Unset means the platform data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Key holding the saved-job list.
    #[serde(default = "default_saved_key")]
    pub saved_key: String,
}

fn default_saved_key() -> String {
    SAVED_JOBS_KEY.to_string()
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            path: None,
            saved_key: default_saved_key(),
        }
    }
}

/// Page chrome options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySection {
    /// Whether the navigation has a mobile hamburger toggle.
    #[serde(default = "default_hamburger")]
    pub hamburger: bool,
}

fn default_hamburger() -> bool {
    true
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            hamburger: default_hamburger(),
        }
    }
}

/// The complete jobtrack.toml structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackerToml {
    #[serde(default)]
    pub data: DataSection,
    #[serde(default)]
    pub storage: StorageSection,
    #[serde(default)]
    pub display: DisplaySection,
}

impl TrackerToml {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse jobtrack.toml")
    }

    /// Load from `<tracker_dir>/jobtrack.toml`, or defaults if it does not exist.
    pub fn load_or_default(tracker_dir: &Path) -> Result<Self> {
        let config_path = tracker_dir.join(CONFIG_FILE);
        if config_path.exists() {
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize jobtrack.toml")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Non-fatal problems worth reporting to the user.
    pub fn validate(&self, project_dir: &Path) -> Vec<String> {
        let mut warnings = Vec::new();

        if let Some(jobs) = &self.data.jobs {
            let resolved = resolve_path(project_dir, jobs);
            if !resolved.exists() {
                warnings.push(format!(
                    "data.jobs points to {} which does not exist",
                    resolved.display()
                ));
            }
        }

        if self.storage.saved_key.trim().is_empty() {
            warnings.push("storage.saved_key is empty".to_string());
        }

        if let Some(path) = &self.storage.path
            && path.is_dir()
        {
            warnings.push(format!(
                "storage.path {} is a directory, expected a file",
                path.display()
            ));
        }

        warnings
    }
}

/// CLI-level overrides, highest precedence.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub jobs: Option<PathBuf>,
    pub storage: Option<PathBuf>,
}

/// Effective runtime configuration.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    pub project_dir: PathBuf,
    pub tracker_dir: PathBuf,
    pub log_dir: PathBuf,
    /// `None` means the bundled sample dataset.
    pub jobs_path: Option<PathBuf>,
    pub storage_path: PathBuf,
    pub saved_key: String,
    pub hamburger: bool,
}

impl TrackerConfig {
    /// Resolve file → environment → CLI.
    pub fn new(project_dir: PathBuf, overrides: CliOverrides) -> Result<Self> {
        let tracker_dir = get_tracker_dir(&project_dir);
        let toml = TrackerToml::load_or_default(&tracker_dir)?;

        let jobs_path = overrides
            .jobs
            .or_else(|| env_path(ENV_JOBS))
            .or(toml.data.jobs)
            .map(|p| resolve_path(&project_dir, &p));

        let storage_path = match overrides
            .storage
            .or_else(|| env_path(ENV_STORAGE))
            .or(toml.storage.path)
        {
            Some(path) => resolve_path(&project_dir, &path),
            None => default_storage_path(&tracker_dir),
        };

        Ok(Self {
            log_dir: tracker_dir.join("logs"),
            project_dir,
            tracker_dir,
            jobs_path,
            storage_path,
            saved_key: toml.storage.saved_key,
            hamburger: toml.display.hamburger,
        })
    }
}

fn env_path(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

fn resolve_path(project_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_dir.join(path)
    }
}

/// Platform data directory, falling back to the project's tracker dir.
fn default_storage_path(tracker_dir: &Path) -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("jobtrack"))
        .unwrap_or_else(|| tracker_dir.to_path_buf())
        .join("storage.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_empty_uses_defaults() {
        let toml = TrackerToml::parse("").unwrap();
        assert!(toml.data.jobs.is_none());
        assert_eq!(toml.storage.saved_key, SAVED_JOBS_KEY);
        assert!(toml.display.hamburger);
    }

    #[test]
    fn test_parse_full() {
        let toml = TrackerToml::parse(
            r#"
[data]
jobs = "data/jobs.json"

[storage]
path = "/tmp/store.json"
saved_key = "custom"

[display]
hamburger = false
"#,
        )
        .unwrap();
        assert_eq!(toml.data.jobs, Some(PathBuf::from("data/jobs.json")));
        assert_eq!(toml.storage.path, Some(PathBuf::from("/tmp/store.json")));
        assert_eq!(toml.storage.saved_key, "custom");
        assert!(!toml.display.hamburger);
    }

    #[test]
    fn test_parse_invalid_is_error() {
        assert!(TrackerToml::parse("[data\njobs = ").is_err());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let mut toml = TrackerToml::default();
        toml.storage.saved_key = "k".to_string();
        toml.save(&path).unwrap();

        let loaded = TrackerToml::load(&path).unwrap();
        assert_eq!(loaded.storage.saved_key, "k");
    }

    #[test]
    fn test_load_or_default_without_file() {
        let dir = TempDir::new().unwrap();
        let toml = TrackerToml::load_or_default(dir.path()).unwrap();
        assert!(toml.data.jobs.is_none());
    }

    #[test]
    fn test_validate_reports_missing_dataset_and_empty_key() {
        let dir = TempDir::new().unwrap();
        let mut toml = TrackerToml::default();
        toml.data.jobs = Some(PathBuf::from("missing.json"));
        toml.storage.saved_key = " ".to_string();
        let warnings = toml.validate(dir.path());
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("missing.json"));
    }

    #[test]
    fn test_cli_overrides_win_and_relative_paths_resolve() {
        let dir = TempDir::new().unwrap();
        let tracker_dir = get_tracker_dir(dir.path());
        std::fs::create_dir_all(&tracker_dir).unwrap();
        std::fs::write(
            tracker_dir.join(CONFIG_FILE),
            "[data]\njobs = \"from-file.json\"\n[storage]\npath = \"store.json\"\n",
        )
        .unwrap();

        let config = TrackerConfig::new(
            dir.path().to_path_buf(),
            CliOverrides {
                jobs: Some(PathBuf::from("from-cli.json")),
                storage: None,
            },
        )
        .unwrap();

        assert_eq!(config.jobs_path, Some(dir.path().join("from-cli.json")));
        // Only holds when JOBTRACK_STORAGE is unset in the test environment.
        if std::env::var_os(ENV_STORAGE).is_none() {
            assert_eq!(config.storage_path, dir.path().join("store.json"));
        }
        assert_eq!(config.log_dir, tracker_dir.join("logs"));
    }
}
