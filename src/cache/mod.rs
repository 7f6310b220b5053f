//! Caching subsystem.
//!
//! Lookups follow the cache-aside pattern against a [`CacheStore`]: check
//! the store, call upstream on a miss, write the outcome back with a TTL.
//!
//! - [`key`] — namespaced key normalization shared by every lookup.
//! - [`MemoryStore`] — bounded in-process store (moka) with per-entry TTL.
//!
//! Stores hold plain strings so that out-of-process backends (redis,
//! memcached) can implement the trait without knowing lookup value types.
//! Lookups encode their values as JSON; see [`encode`] and [`decode`].

pub mod key;
pub mod memory;

pub use key::{ITUNES_NAMESPACE, PREVIEW_NAMESPACE, YOUTUBE_NAMESPACE, cache_key, normalize_term};
pub use memory::MemoryStore;

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

/// Shared key-value store with get / set-with-TTL.
///
/// Implementations must be safe for concurrent use. Entries past their TTL
/// must never be returned from [`get`](Self::get).
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Fetch a live entry, or `None` on miss.
    async fn get(&self, key: &str) -> Option<String>;

    /// Insert or overwrite an entry that expires `ttl` after this write.
    async fn set(&self, key: &str, value: String, ttl: Duration);

    /// Remove a single entry.
    async fn delete(&self, key: &str);

    /// Remove every entry.
    async fn clear(&self);
}

/// Encode a lookup value for storage.
pub(crate) fn encode<T: Serialize>(value: &T) -> crate::Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Decode a stored value. Corrupt entries are logged and reported as a miss.
pub(crate) fn decode<T: DeserializeOwned>(key: &str, raw: &str) -> Option<T> {
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, error = %e, "ignoring undecodable cache entry");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_sentinel_is_distinct_from_miss() {
        let raw = encode::<Option<String>>(&None).unwrap();
        assert_eq!(raw, "null");
        let decoded: Option<Option<String>> = decode("ytid:x", &raw);
        assert_eq!(decoded, Some(None));
    }

    #[test]
    fn found_id_roundtrips() {
        let raw = encode(&Some("abc123".to_string())).unwrap();
        let decoded: Option<Option<String>> = decode("ytid:x", &raw);
        assert_eq!(decoded, Some(Some("abc123".to_string())));
    }

    #[test]
    fn corrupt_entry_is_a_miss() {
        let decoded: Option<Option<String>> = decode("ytid:x", "{not json");
        assert!(decoded.is_none());
    }
}
