//! Saved-job set persisted under a single storage key.
//!
//! The set is stored as a JSON list of job ids. Every read loads it fresh
//! from the store and every toggle rewrites the whole list, so there is no
//! cached copy that could drift from what is persisted.

use crate::errors::StorageError;
use crate::storage::KeyValueStore;

/// Default storage key for the saved-job list.
pub const SAVED_JOBS_KEY: &str = "jobtrack.savedJobs";

pub struct SavedJobs<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> SavedJobs<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, SAVED_JOBS_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Saved ids in insertion order.
    ///
    /// Missing, unreadable or malformed data yields an empty list.
    pub fn ids(&self) -> Vec<u64> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to read saved jobs");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<u64>>(&raw) {
            Ok(ids) => dedup(ids),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Saved jobs data is malformed, treating as empty");
                Vec::new()
            }
        }
    }

    pub fn is_saved(&self, id: u64) -> bool {
        self.ids().contains(&id)
    }

    /// Flip membership of `id` and persist the full list.
    ///
    /// Returns the new membership: `true` if the job is now saved.
    pub fn toggle(&mut self, id: u64) -> Result<bool, StorageError> {
        let mut ids = self.ids();
        let now_saved = match ids.iter().position(|saved| *saved == id) {
            Some(index) => {
                ids.remove(index);
                false
            }
            None => {
                ids.push(id);
                true
            }
        };

        let value = serde_json::to_string(&ids).map_err(StorageError::Serialize)?;
        self.store.set(&self.key, value)?;
        tracing::info!(job_id = id, saved = now_saved, "Toggled saved job");
        Ok(now_saved)
    }
}

fn dedup(ids: Vec<u64>) -> Vec<u64> {
    let mut out = Vec::with_capacity(ids.len());
    for id in ids {
        if !out.contains(&id) {
            out.push(id);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_empty_store_has_nothing_saved() {
        let saved = SavedJobs::new(MemoryStore::new());
        assert!(saved.ids().is_empty());
        assert!(!saved.is_saved(1));
    }

    #[test]
    fn test_toggle_twice_restores_membership() {
        let mut saved = SavedJobs::new(MemoryStore::new());
        assert!(saved.toggle(5).unwrap());
        assert!(saved.is_saved(5));
        assert!(!saved.toggle(5).unwrap());
        assert!(!saved.is_saved(5));
    }

    #[test]
    fn test_sequential_toggles_converge() {
        let mut saved = SavedJobs::new(MemoryStore::new());
        for id in [1, 2, 3, 2, 4, 1, 2] {
            saved.toggle(id).unwrap();
        }
        // 1: twice (off), 2: three times (on), 3: once, 4: once.
        assert_eq!(saved.ids(), vec![3, 4, 2]);
    }

    #[test]
    fn test_toggle_writes_whole_list() {
        let mut saved = SavedJobs::new(MemoryStore::new());
        saved.toggle(1).unwrap();
        saved.toggle(2).unwrap();
        let raw = saved.store().get(SAVED_JOBS_KEY).unwrap().unwrap();
        assert_eq!(raw, "[1,2]");
    }

    #[test]
    fn test_malformed_data_is_empty_and_recoverable() {
        let store = MemoryStore::new().with_entry(SAVED_JOBS_KEY, "not-json");
        let mut saved = SavedJobs::new(store);
        assert!(saved.ids().is_empty());

        assert!(saved.toggle(9).unwrap());
        assert_eq!(saved.ids(), vec![9]);
    }

    #[test]
    fn test_wrong_shape_is_empty() {
        let store = MemoryStore::new().with_entry(SAVED_JOBS_KEY, r#"{"ids":[1]}"#);
        let saved = SavedJobs::new(store);
        assert!(saved.ids().is_empty());
    }

    #[test]
    fn test_duplicates_in_storage_are_dropped() {
        let store = MemoryStore::new().with_entry(SAVED_JOBS_KEY, "[3,1,3,1]");
        let mut saved = SavedJobs::new(store);
        assert_eq!(saved.ids(), vec![3, 1]);

        // A single toggle removes the id entirely.
        assert!(!saved.toggle(3).unwrap());
        assert!(!saved.is_saved(3));
    }

    #[test]
    fn test_custom_key_is_isolated() {
        let mut saved = SavedJobs::with_key(MemoryStore::new(), "other");
        saved.toggle(1).unwrap();
        assert_eq!(saved.key(), "other");
        assert!(saved.store().get(SAVED_JOBS_KEY).unwrap().is_none());
    }

    #[test]
    fn test_toggle_recovers_from_undecodable_storage_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x7b]).unwrap();

        let mut saved = SavedJobs::new(crate::storage::FileStore::new(&path));
        assert!(saved.ids().is_empty());
        assert!(saved.toggle(4).unwrap());
        assert_eq!(saved.ids(), vec![4]);
    }
}
