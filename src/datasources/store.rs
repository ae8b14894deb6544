//! Data source store
//!
//! Holds the in-process list of data source records. Only the lifecycle
//! controller writes to it; everyone else reads snapshots or subscribes.

use crate::models::{DataSourceRecord, PluginMeta};
use std::sync::Arc;
use tokio::sync::watch;

/// Observable contents of the store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreSnapshot {
    pub data_sources: Vec<DataSourceRecord>,
    /// Set once the full list has been loaded at least once
    pub has_fetched: bool,
    /// Plugin meta of the most recently loaded data source
    pub data_source_meta: Option<PluginMeta>,
}

/// Shared data source store
#[derive(Clone)]
pub struct DataSourceStore {
    tx: Arc<watch::Sender<StoreSnapshot>>,
}

impl DataSourceStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(StoreSnapshot::default());
        Self { tx: Arc::new(tx) }
    }

    /// Replace every record (full list load)
    pub(crate) fn replace_all(&self, records: Vec<DataSourceRecord>) {
        self.tx.send_modify(|state| {
            state.data_sources = records;
            state.has_fetched = true;
        });
    }

    /// Add or update a loaded record, matched by id, together with its plugin meta
    pub(crate) fn upsert(&self, record: DataSourceRecord, meta: PluginMeta) {
        self.tx.send_modify(|state| {
            match state.data_sources.iter_mut().find(|r| r.id == record.id) {
                Some(existing) => *existing = record,
                None => state.data_sources.push(record),
            }
            state.data_source_meta = Some(meta);
        });
    }

    /// Remove a record by id
    pub(crate) fn remove(&self, id: i64) -> Option<DataSourceRecord> {
        let mut removed = None;
        self.tx.send_if_modified(|state| {
            if let Some(pos) = state.data_sources.iter().position(|r| r.id == id) {
                removed = Some(state.data_sources.remove(pos));
                true
            } else {
                false
            }
        });
        removed
    }

    /// Get all records
    pub fn all(&self) -> Vec<DataSourceRecord> {
        self.tx.borrow().data_sources.clone()
    }

    /// Get a specific record
    pub fn get(&self, id: i64) -> Option<DataSourceRecord> {
        self.tx
            .borrow()
            .data_sources
            .iter()
            .find(|r| r.id == id)
            .cloned()
    }

    /// Names of all records
    pub fn names(&self) -> Vec<String> {
        self.tx
            .borrow()
            .data_sources
            .iter()
            .map(|r| r.name.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tx.borrow().data_sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Plugin meta published by the last successful single load
    pub fn data_source_meta(&self) -> Option<PluginMeta> {
        self.tx.borrow().data_source_meta.clone()
    }

    pub fn has_fetched(&self) -> bool {
        self.tx.borrow().has_fetched
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        self.tx.borrow().clone()
    }

    /// Watch the store for changes
    pub fn subscribe(&self) -> watch::Receiver<StoreSnapshot> {
        self.tx.subscribe()
    }
}

impl Default for DataSourceStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(id: &str) -> PluginMeta {
        PluginMeta::new(id, id)
    }

    #[test]
    fn test_store_new() {
        let store = DataSourceStore::new();
        assert!(store.is_empty());
        assert!(!store.has_fetched());
        assert!(store.data_source_meta().is_none());
    }

    #[test]
    fn test_replace_all() {
        let store = DataSourceStore::new();
        store.upsert(DataSourceRecord::new(9, "stale", "graphite"), meta("graphite"));
        store.replace_all(vec![
            DataSourceRecord::new(1, "a", "prometheus"),
            DataSourceRecord::new(2, "b", "loki"),
        ]);

        assert!(store.has_fetched());
        assert_eq!(store.names(), vec!["a", "b"]);
        assert!(store.get(9).is_none());
    }

    #[test]
    fn test_upsert_replaces_by_id() {
        let store = DataSourceStore::new();
        store.upsert(DataSourceRecord::new(1, "a", "prometheus"), meta("prometheus"));
        store.upsert(DataSourceRecord::new(1, "renamed", "prometheus"), meta("prometheus"));
        store.upsert(DataSourceRecord::new(2, "b", "loki"), meta("loki"));

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1).unwrap().name, "renamed");
        assert_eq!(store.data_source_meta().unwrap().id, "loki");
    }

    #[test]
    fn test_remove() {
        let store = DataSourceStore::new();
        store.upsert(DataSourceRecord::new(1, "a", "prometheus"), meta("prometheus"));

        assert_eq!(store.remove(1).map(|r| r.name), Some("a".to_string()));
        assert!(store.remove(1).is_none());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_subscribers_see_changes() {
        let store = DataSourceStore::new();
        let mut rx = store.subscribe();

        store.upsert(DataSourceRecord::new(1, "a", "prometheus"), meta("prometheus"));
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().data_sources.len(), 1);

        // Removing a missing id does not notify
        store.remove(42);
        assert!(!rx.has_changed().unwrap());
    }
}
