//! iTunes preview URL lookup.

use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use super::{found_outcome, read_cached, record_outcome, write_cached};
use crate::cache::{CacheStore, ITUNES_NAMESPACE, cache_key};
use crate::providers::PreviewSource;

/// How long an iTunes preview URL (or its absence) stays cached.
pub const ITUNES_PREVIEW_TTL: Duration = Duration::from_secs(60 * 60 * 24);

/// Cache-aside lookup from free text to an iTunes 30-second preview URL.
pub struct ItunesPreviewLookup {
    store: Arc<dyn CacheStore>,
    source: Arc<dyn PreviewSource>,
    ttl: Duration,
    use_cache: bool,
}

impl ItunesPreviewLookup {
    /// Create a lookup over `store`, querying `source` on a miss.
    pub fn new(store: Arc<dyn CacheStore>, source: Arc<dyn PreviewSource>) -> Self {
        Self {
            store,
            source,
            ttl: ITUNES_PREVIEW_TTL,
            use_cache: true,
        }
    }

    /// Override the cache TTL (default: 24 hours).
    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Bypass the store entirely: always query, never write.
    pub fn use_cache(mut self, enabled: bool) -> Self {
        self.use_cache = enabled;
        self
    }

    /// Resolve `term` to a preview URL.
    ///
    /// Rejected requests are cached as "no preview"; network and server
    /// failures are not cached.
    pub async fn lookup(&self, term: &str) -> Option<String> {
        let key = cache_key(ITUNES_NAMESPACE, term);

        if self.use_cache {
            if let Some(cached) =
                read_cached::<Option<String>>(&*self.store, ITUNES_NAMESPACE, &key).await
            {
                record_outcome(ITUNES_NAMESPACE, found_outcome(&cached));
                return cached;
            }
        }

        let url = match self.source.preview_url(term).await {
            Ok(url) => url,
            Err(e) if e.is_client_error() => {
                warn!(term, provider = self.source.name(), error = %e, "preview search rejected");
                None
            }
            Err(e) => {
                warn!(term, provider = self.source.name(), error = %e, "preview search failed");
                record_outcome(ITUNES_NAMESPACE, "failed");
                return None;
            }
        };

        if self.use_cache {
            write_cached(&*self.store, &key, &url, self.ttl).await;
        }
        record_outcome(ITUNES_NAMESPACE, found_outcome(&url));
        url
    }
}
