//! The shared compare store: one mutex, one storage file.
//!
//! The compare set is the only state shared across otherwise-independent
//! UI surfaces (item cards, the floating compare bar, the compare page),
//! so every access goes through a single lock. It is also the only
//! durable state in the core: the `items` list, and nothing else, is
//! written to a named JSON record on every items mutation and reloaded
//! verbatim on the next open.
//!
//! URL hydration is strictly one-way: `hydrate_from_query` reads an
//! `items` param into the store, and the store never produces a URL.
//! The compare page owns the write side of that contract.

use crate::set::CompareSet;
use find7_core::config::CompareConfig;
use find7_core::urlquery::QueryParams;
use find7_core::{Error, Result, ResultExt};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

/// The persisted record: only the ordered items, never the UI hints
#[derive(Debug, Serialize, Deserialize)]
struct StoredCompare {
    items: Vec<String>,
}

/// Mutex-guarded compare set with optional durable storage.
#[derive(Debug)]
pub struct CompareStore {
    inner: Mutex<CompareSet>,
    storage_path: Option<PathBuf>,
}

impl CompareStore {
    /// A store with no durability (tests, ephemeral sessions)
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            inner: Mutex::new(CompareSet::new()),
            storage_path: None,
        }
    }

    /// Open a durable store, reloading any persisted selection.
    ///
    /// A missing file is a fresh store, not an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let mut set = CompareSet::new();

        if path.exists() {
            let raw = fs::read_to_string(&path)
                .map_err(Error::from)
                .context(format!("Failed to read compare store {}", path.display()))?;
            let stored: StoredCompare = serde_json::from_str(&raw)
                .map_err(Error::from)
                .context(format!("Failed to parse compare store {}", path.display()))?;
            set.set_items(stored.items);
            tracing::debug!(items = set.len(), path = %path.display(), "compare set reloaded");
        }

        Ok(Self {
            inner: Mutex::new(set),
            storage_path: Some(path),
        })
    }

    /// Open the store at the configured (or default) location
    pub fn with_config(config: &CompareConfig) -> Result<Self> {
        Self::open(config.resolved_storage_path())
    }

    /// Clone of the current state, for rendering
    #[must_use]
    pub fn snapshot(&self) -> CompareSet {
        self.lock().clone()
    }

    /// Add a slug; persists when the selection changed
    pub fn add(&self, slug: &str) -> Result<bool> {
        let (added, snapshot) = {
            let mut set = self.lock();
            let added = set.add(slug);
            (added, set.clone())
        };
        if added {
            self.persist(&snapshot)?;
        }
        Ok(added)
    }

    /// Remove a slug; persists when the selection changed
    pub fn remove(&self, slug: &str) -> Result<bool> {
        let (removed, snapshot) = {
            let mut set = self.lock();
            let removed = set.remove(slug);
            (removed, set.clone())
        };
        if removed {
            self.persist(&snapshot)?;
        }
        Ok(removed)
    }

    /// Toggle membership; persists when the selection changed
    pub fn toggle(&self, slug: &str) -> Result<()> {
        let (changed, snapshot) = {
            let mut set = self.lock();
            let before = set.items().to_vec();
            set.toggle(slug);
            (set.items() != before.as_slice(), set.clone())
        };
        if changed {
            self.persist(&snapshot)?;
        }
        Ok(())
    }

    /// Bulk-replace the selection (hydration, drag reorder); always
    /// persists
    pub fn set_items<I, S>(&self, slugs: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let snapshot = {
            let mut set = self.lock();
            set.set_items(slugs);
            set.clone()
        };
        self.persist(&snapshot)
    }

    /// Empty the selection; always persists
    pub fn clear(&self) -> Result<()> {
        let snapshot = {
            let mut set = self.lock();
            set.clear();
            set.clone()
        };
        self.persist(&snapshot)
    }

    /// Dismiss the `last_added` hint (UI hint only, never persisted)
    pub fn reset_last_added(&self) {
        self.lock().reset_last_added();
    }

    /// Dismiss the `limit_reached` hint (UI hint only, never persisted)
    pub fn reset_limit(&self) {
        self.lock().reset_limit();
    }

    /// Hydrate the selection from a URL query string's `items` param.
    ///
    /// One-way: this is the only path by which the URL reaches the
    /// store. Absent param means no change.
    pub fn hydrate_from_query(&self, query_string: &str) -> Result<()> {
        let params = QueryParams::parse(query_string);
        let slugs = params.get_list("items");
        if slugs.is_empty() {
            return Ok(());
        }
        tracing::debug!(items = slugs.len(), "compare set hydrated from URL");
        self.set_items(slugs)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, CompareSet> {
        // A poisoned lock still holds valid data; recover it
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn persist(&self, set: &CompareSet) -> Result<()> {
        let Some(path) = &self.storage_path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(Error::from)
                .context(format!("Failed to create {}", parent.display()))?;
        }

        let record = StoredCompare {
            items: set.items().to_vec(),
        };
        let json = serde_json::to_string_pretty(&record)
            .map_err(Error::from)
            .context("Failed to serialize compare store")?;
        fs::write(path, json)
            .map_err(Error::from)
            .context(format!("Failed to write compare store {}", path.display()))?;

        tracing::trace!(items = record.items.len(), "compare set persisted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_at(dir: &TempDir) -> (CompareStore, PathBuf) {
        let path = dir.path().join("compare.json");
        (CompareStore::open(&path).unwrap(), path)
    }

    #[test]
    fn test_in_memory_roundtrip() {
        let store = CompareStore::in_memory();
        store.add("a").unwrap();
        store.add("b").unwrap();
        assert_eq!(store.snapshot().items(), ["a", "b"]);
    }

    #[test]
    fn test_persistence_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let (store, path) = store_at(&dir);

        store.add("travel-pick-1").unwrap();
        store.add("value-pick-3").unwrap();
        store.add("premium-pick-2").unwrap();
        drop(store);

        let reopened = CompareStore::open(&path).unwrap();
        assert_eq!(
            reopened.snapshot().items(),
            ["travel-pick-1", "value-pick-3", "premium-pick-2"]
        );
    }

    #[test]
    fn test_persisted_record_is_items_only() {
        let dir = TempDir::new().unwrap();
        let (store, path) = store_at(&dir);

        store.add("a").unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("items"));
        assert!(!raw.contains("last_added"));
        assert!(!raw.contains("limit_reached"));

        // Reload: hints start clean even though "a" was the last add
        let reopened = CompareStore::open(&path).unwrap();
        assert!(reopened.snapshot().last_added().is_none());
    }

    #[test]
    fn test_failed_add_does_not_persist_change() {
        let dir = TempDir::new().unwrap();
        let (store, path) = store_at(&dir);

        for slug in ["a", "b", "c", "d"] {
            store.add(slug).unwrap();
        }
        let before = fs::read_to_string(&path).unwrap();

        assert!(!store.add("e").unwrap());
        assert!(store.snapshot().limit_reached());
        let after = fs::read_to_string(&path).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_hydrate_from_query() {
        let store = CompareStore::in_memory();
        store.hydrate_from_query("?items=a,b,c").unwrap();
        assert_eq!(store.snapshot().items(), ["a", "b", "c"]);

        // Hydration clears transient hints unconditionally
        assert!(store.snapshot().last_added().is_none());
    }

    #[test]
    fn test_hydrate_absent_param_is_noop() {
        let store = CompareStore::in_memory();
        store.add("keep-me").unwrap();
        store.hydrate_from_query("q=desk").unwrap();
        assert_eq!(store.snapshot().items(), ["keep-me"]);
    }

    #[test]
    fn test_hydrate_dedups_and_truncates() {
        let store = CompareStore::in_memory();
        store
            .hydrate_from_query("items=a,a,b,c,d,e")
            .unwrap();
        assert_eq!(store.snapshot().items(), ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_remove_after_hydration_keeps_store_silent() {
        // One-way contract: mutating after hydration produces no URL;
        // the store has no URL writer at all, so the selection just
        // changes in place.
        let store = CompareStore::in_memory();
        store.hydrate_from_query("items=a,b,c").unwrap();
        store.remove("b").unwrap();
        assert_eq!(store.snapshot().items(), ["a", "c"]);
    }

    #[test]
    fn test_reorder_via_set_items_persists() {
        let dir = TempDir::new().unwrap();
        let (store, path) = store_at(&dir);

        store.set_items(["a", "b", "c"]).unwrap();
        store.set_items(["c", "a", "b"]).unwrap();
        drop(store);

        let reopened = CompareStore::open(&path).unwrap();
        assert_eq!(reopened.snapshot().items(), ["c", "a", "b"]);
    }

    #[test]
    fn test_corrupt_record_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("compare.json");
        fs::write(&path, "not json").unwrap();

        let err = CompareStore::open(&path).unwrap_err();
        assert!(err.context.is_some());
    }

    #[test]
    fn test_shared_across_threads() {
        use std::sync::Arc;

        let store = Arc::new(CompareStore::in_memory());
        let mut handles = Vec::new();
        for i in 0..8 {
            let store = Arc::clone(&store);
            handles.push(std::thread::spawn(move || {
                let slug = format!("item-{}", i % 6);
                store.toggle(&slug).unwrap();
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
        assert!(store.snapshot().len() <= crate::set::MAX_COMPARE_ITEMS);
    }
}
