//! In-process cache store backed by moka.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use moka::Expiry;
use moka::future::Cache;

use super::CacheStore;

/// Default maximum number of entries in a [`MemoryStore`].
const DEFAULT_MAX_ENTRIES: u64 = 10_000;

#[derive(Clone)]
struct StoredValue {
    value: String,
    ttl: Duration,
}

/// Expire each entry after its own TTL, restarting the clock on overwrite.
struct PerEntryTtl;

impl Expiry<String, StoredValue> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &StoredValue,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &StoredValue,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// Bounded in-memory [`CacheStore`].
///
/// Uses moka's async LRU cache with a per-entry expiry policy, so entries
/// written by different lookups (12 h video ids, 1 h preview links) can
/// share one store.
pub struct MemoryStore {
    entries: Cache<String, StoredValue>,
}

impl MemoryStore {
    /// Create an empty store with the default max capacity (10,000).
    pub fn new() -> Self {
        Self::with_max_entries(DEFAULT_MAX_ENTRIES)
    }

    /// Create a store with a custom max capacity.
    pub fn with_max_entries(max: u64) -> Self {
        let entries = Cache::builder()
            .max_capacity(max)
            .expire_after(PerEntryTtl)
            .build();
        Self { entries }
    }

    /// Number of entries currently held (approximate until pending
    /// maintenance runs).
    pub fn len(&self) -> u64 {
        self.entries.entry_count()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).await.map(|stored| stored.value)
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) {
        self.entries
            .insert(key.to_string(), StoredValue { value, ttl })
            .await;
    }

    async fn delete(&self, key: &str) {
        self.entries.invalidate(key).await;
    }

    async fn clear(&self) {
        self.entries.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn miss_then_hit() {
        let store = MemoryStore::new();
        assert!(store.get("ytid:creep").await.is_none());

        store
            .set("ytid:creep", "\"XFkzRNyygfk\"".into(), Duration::from_secs(60))
            .await;
        assert_eq!(
            store.get("ytid:creep").await.as_deref(),
            Some("\"XFkzRNyygfk\"")
        );
    }

    #[tokio::test]
    async fn entry_expires_after_its_ttl() {
        let store = MemoryStore::new();
        store
            .set("short", "1".into(), Duration::from_millis(50))
            .await;
        store.set("long", "2".into(), Duration::from_secs(60)).await;

        tokio::time::sleep(Duration::from_millis(150)).await;

        assert!(store.get("short").await.is_none());
        assert_eq!(store.get("long").await.as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn overwrite_restarts_ttl() {
        let store = MemoryStore::new();
        store.set("k", "old".into(), Duration::from_millis(50)).await;
        store.set("k", "new".into(), Duration::from_secs(60)).await;

        tokio::time::sleep(Duration::from_millis(150)).await;

        assert_eq!(store.get("k").await.as_deref(), Some("new"));
    }

    #[tokio::test]
    async fn capacity_is_bounded() {
        let store = MemoryStore::with_max_entries(10);
        for i in 0..50 {
            store
                .set(&format!("k{i}"), i.to_string(), Duration::from_secs(60))
                .await;
        }
        store.entries.run_pending_tasks().await;

        assert!(store.len() <= 10, "held {} entries", store.len());
        assert!(!store.is_empty());
    }

    #[tokio::test]
    async fn delete_and_clear() {
        let store = MemoryStore::new();
        store.set("a", "1".into(), Duration::from_secs(60)).await;
        store.set("b", "2".into(), Duration::from_secs(60)).await;

        store.delete("a").await;
        assert!(store.get("a").await.is_none());
        assert!(store.get("b").await.is_some());

        store.clear().await;
        assert!(store.get("b").await.is_none());
    }
}
