//! YouTube video id lookup.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;
use tracing::{debug, info, warn};

use super::{found_outcome, read_cached, record_outcome, write_cached};
use crate::cache::{CacheStore, YOUTUBE_NAMESPACE, cache_key};
use crate::providers::VideoSearch;

/// How long a video id (or a definitive "not found") stays cached.
pub const VIDEO_ID_TTL: Duration = Duration::from_secs(60 * 60 * 12);

const WATCH_URL: &str = "https://www.youtube.com/watch";
const RESULTS_URL: &str = "https://www.youtube.com/results";

/// `https://www.youtube.com/watch?v=<id>`
pub fn watch_url(video_id: &str) -> String {
    with_query(WATCH_URL, "v", video_id)
}

/// `https://www.youtube.com/results?search_query=<term>`, form-encoded.
///
/// The fallback link shown when no video id could be resolved.
pub fn search_results_url(term: &str) -> String {
    with_query(RESULTS_URL, "search_query", term)
}

fn with_query(base: &str, name: &str, value: &str) -> String {
    Url::parse_with_params(base, &[(name, value)])
        .map(String::from)
        .unwrap_or_else(|_| base.to_string())
}

/// Cache-aside lookup from free text to a YouTube video id.
///
/// The search client is optional: without an API key there is nothing to
/// call, so uncached terms resolve to `None` and nothing is written. Once
/// a key is configured the next lookup goes upstream.
///
/// ```rust,no_run
/// # use std::sync::Arc;
/// # use nexttrack::cache::MemoryStore;
/// # use nexttrack::lookup::VideoLookup;
/// # use nexttrack::providers::{VideoSearch, YouTubeClient};
/// # async fn demo() -> nexttrack::Result<()> {
/// let search: Arc<dyn VideoSearch> = Arc::new(YouTubeClient::new("yt-api-key")?);
/// let lookup = VideoLookup::new(Arc::new(MemoryStore::new()), Some(search));
/// let id = lookup.lookup("Radiohead Creep").await;
/// # Ok(())
/// # }
/// ```
pub struct VideoLookup {
    store: Arc<dyn CacheStore>,
    search: Option<Arc<dyn VideoSearch>>,
    ttl: Duration,
}

impl VideoLookup {
    /// Create a lookup over `store`, searching with `search` when present.
    pub fn new(store: Arc<dyn CacheStore>, search: Option<Arc<dyn VideoSearch>>) -> Self {
        Self {
            store,
            search,
            ttl: VIDEO_ID_TTL,
        }
    }

    /// Override the cache TTL (default: 12 hours).
    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Whether a search client (and so an API key) is configured.
    pub fn is_configured(&self) -> bool {
        self.search.is_some()
    }

    /// Resolve `term` to the first matching video id.
    ///
    /// Never fails: a missing key, a rejected request or a network error
    /// all come back as `None`.
    pub async fn lookup(&self, term: &str) -> Option<String> {
        let key = cache_key(YOUTUBE_NAMESPACE, term);

        if let Some(cached) = read_cached::<Option<String>>(&*self.store, YOUTUBE_NAMESPACE, &key).await
        {
            debug!(%key, found = cached.is_some(), "video id cache hit");
            record_outcome(YOUTUBE_NAMESPACE, found_outcome(&cached));
            return cached;
        }

        let Some(search) = &self.search else {
            info!(term, "no YouTube API key configured, skipping video search");
            record_outcome(YOUTUBE_NAMESPACE, "unconfigured");
            return None;
        };

        match search.first_video_id(term).await {
            Ok(video_id) => {
                write_cached(&*self.store, &key, &video_id, self.ttl).await;
                record_outcome(YOUTUBE_NAMESPACE, found_outcome(&video_id));
                video_id
            }
            Err(e) if e.is_client_error() => {
                info!(term, provider = search.name(), error = %e, "video search rejected, caching as not found");
                write_cached(&*self.store, &key, &None::<String>, self.ttl).await;
                record_outcome(YOUTUBE_NAMESPACE, "not_found");
                None
            }
            Err(e) => {
                warn!(term, provider = search.name(), error = %e, "video search failed");
                record_outcome(YOUTUBE_NAMESPACE, "failed");
                None
            }
        }
    }

    /// Watch URL for `term`, or the search-results URL when no id resolves.
    pub async fn url(&self, term: &str) -> String {
        match self.lookup(term).await {
            Some(id) => watch_url(&id),
            None => search_results_url(term),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_url_format() {
        assert_eq!(
            watch_url("XFkzRNyygfk"),
            "https://www.youtube.com/watch?v=XFkzRNyygfk"
        );
    }

    #[test]
    fn search_results_url_is_form_encoded() {
        assert_eq!(
            search_results_url("Radiohead Creep"),
            "https://www.youtube.com/results?search_query=Radiohead+Creep"
        );
        assert_eq!(
            search_results_url("AC/DC & Friends"),
            "https://www.youtube.com/results?search_query=AC%2FDC+%26+Friends"
        );
    }
}
