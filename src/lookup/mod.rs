//! Cache-aside lookup units.
//!
//! Each unit owns a cache namespace and follows the same sequence: read
//! the store, call upstream on a miss, write the outcome back with the
//! unit's TTL. None of them return errors; every failure resolves to "no
//! result" so callers can always fall back to a plain search link.
//!
//! | Unit | Namespace | TTL | Upstream |
//! |---|---|---|---|
//! | [`VideoLookup`] | `ytid` | 12 h | YouTube search |
//! | [`ItunesPreviewLookup`] | `itunes` | 24 h | iTunes search |
//! | [`PreviewLookup`] | `prev` | 1 h | Deezer, iTunes, [`VideoLookup`] |
//!
//! # Caching policy
//!
//! - upstream answered (hit or empty result): cached
//! - upstream rejected the request (4xx): cached as "not found"
//! - transient failure (network, timeout, 5xx): not cached, retried next call
//!
//! Concurrent lookups of the same uncached term are not coalesced; each
//! may reach upstream once.

mod itunes;
mod preview;
mod video;

pub use itunes::{ITUNES_PREVIEW_TTL, ItunesPreviewLookup};
pub use preview::{PREVIEW_TTL, PreviewLookup};
pub use video::{VIDEO_ID_TTL, VideoLookup, search_results_url, watch_url};

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::cache::{self, CacheStore};
use crate::telemetry;

/// Read and decode a cached value, recording hit/miss metrics.
async fn read_cached<T: DeserializeOwned>(
    store: &dyn CacheStore,
    namespace: &'static str,
    key: &str,
) -> Option<T> {
    let hit = match store.get(key).await {
        Some(raw) => cache::decode(key, &raw),
        None => None,
    };

    if hit.is_some() {
        metrics::counter!(telemetry::CACHE_HITS_TOTAL, "namespace" => namespace).increment(1);
    } else {
        metrics::counter!(telemetry::CACHE_MISSES_TOTAL, "namespace" => namespace).increment(1);
    }
    hit
}

/// Encode and store a value. Encoding failures are logged, never raised.
async fn write_cached<T: Serialize>(store: &dyn CacheStore, key: &str, value: &T, ttl: Duration) {
    match cache::encode(value) {
        Ok(raw) => store.set(key, raw, ttl).await,
        Err(e) => warn!(key, error = %e, "failed to encode cache entry"),
    }
}

fn record_outcome(namespace: &'static str, outcome: &'static str) {
    metrics::counter!(telemetry::LOOKUPS_TOTAL,
        "namespace" => namespace,
        "outcome" => outcome,
    )
    .increment(1);
}

fn found_outcome<T>(value: &Option<T>) -> &'static str {
    if value.is_some() { "found" } else { "not_found" }
}
