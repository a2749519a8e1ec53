//! In-memory address cache
//!
//! Unbounded, process-lifetime store of every address the proxy has
//! successfully resolved. No eviction, no TTL, no persistence; a restart
//! starts empty. Insertion order is observable because the unsorted
//! listing endpoint returns it.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::models::AddressRecord;

/// Shared, insertion-ordered map from normalized CEP key to record.
///
/// The store is constructed once at startup and cloned into every service
/// that needs it; clones share the same underlying map. Keys are always
/// the 8-digit canonical form (callers go through `Cep`, which enforces
/// this), and an existing entry is never replaced, so there is at most
/// one record per CEP for the life of the process.
#[derive(Debug, Clone, Default)]
pub struct AddressCache {
    inner: Arc<RwLock<CacheInner>>,
}

#[derive(Debug, Default)]
struct CacheInner {
    index: HashMap<String, usize>,
    records: Vec<AddressRecord>,
}

impl AddressCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a record by its normalized key.
    pub fn get(&self, key: &str) -> Option<AddressRecord> {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        inner.index.get(key).map(|&i| inner.records[i].clone())
    }

    /// Store a record under its normalized key, returning the record now
    /// held in the cache.
    ///
    /// First write wins: if two racing lookups resolved the same CEP, the
    /// second insert is a no-op and the caller gets the already-stored
    /// record (both writers carry identical data for the same key).
    pub fn insert(&self, key: &str, record: AddressRecord) -> AddressRecord {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        if let Some(&i) = inner.index.get(key) {
            return inner.records[i].clone();
        }
        inner.records.push(record.clone());
        let position = inner.records.len() - 1;
        inner.index.insert(key.to_string(), position);
        record
    }

    /// All cached records, in insertion order.
    pub fn snapshot(&self) -> Vec<AddressRecord> {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        inner.records.clone()
    }

    pub fn len(&self) -> usize {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        inner.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(cep: &str, city: &str) -> AddressRecord {
        serde_json::from_value(json!({"cep": cep, "localidade": city})).unwrap()
    }

    #[test]
    fn get_returns_inserted_record() {
        let cache = AddressCache::new();
        assert!(cache.get("01001000").is_none());

        cache.insert("01001000", record("01001-000", "São Paulo"));
        let hit = cache.get("01001000").unwrap();
        assert_eq!(hit.city, "São Paulo");
    }

    #[test]
    fn snapshot_preserves_insertion_order() {
        let cache = AddressCache::new();
        cache.insert("20040002", record("20040-002", "Rio de Janeiro"));
        cache.insert("01001000", record("01001-000", "São Paulo"));
        cache.insert("30130010", record("30130-010", "Belo Horizonte"));

        let cities: Vec<String> = cache.snapshot().into_iter().map(|r| r.city).collect();
        assert_eq!(cities, ["Rio de Janeiro", "São Paulo", "Belo Horizonte"]);
    }

    #[test]
    fn duplicate_insert_keeps_first_record() {
        let cache = AddressCache::new();
        cache.insert("01001000", record("01001-000", "São Paulo"));
        let stored = cache.insert("01001000", record("01001-000", "Duplicata"));

        assert_eq!(stored.city, "São Paulo");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn clones_share_the_same_store() {
        let cache = AddressCache::new();
        let alias = cache.clone();
        cache.insert("01001000", record("01001-000", "São Paulo"));
        assert_eq!(alias.len(), 1);
        assert!(alias.get("01001000").is_some());
    }
}
