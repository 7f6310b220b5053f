//! Combined preview + YouTube link lookup.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use super::{
    ItunesPreviewLookup, VideoLookup, found_outcome, read_cached, record_outcome, write_cached,
};
use crate::cache::{CacheStore, PREVIEW_NAMESPACE, cache_key};
use crate::providers::TrackSearch;
use crate::types::PreviewLinks;

/// How long a resolved pair of links stays cached.
pub const PREVIEW_TTL: Duration = Duration::from_secs(60 * 60);

/// Resolves the links shown next to a track.
///
/// The preview clip comes from the first Deezer hit when it carries one,
/// otherwise from iTunes. The YouTube link comes from [`VideoLookup`],
/// degrading to a search-results link. The pair is cached as a whole,
/// whatever the individual sources returned.
pub struct PreviewLookup {
    store: Arc<dyn CacheStore>,
    tracks: Option<Arc<dyn TrackSearch>>,
    itunes: Option<Arc<ItunesPreviewLookup>>,
    videos: Arc<VideoLookup>,
    ttl: Duration,
}

impl PreviewLookup {
    /// Create a lookup with no preview sources; add them with
    /// [`tracks`](Self::tracks) and [`itunes`](Self::itunes).
    pub fn new(store: Arc<dyn CacheStore>, videos: Arc<VideoLookup>) -> Self {
        Self {
            store,
            tracks: None,
            itunes: None,
            videos,
            ttl: PREVIEW_TTL,
        }
    }

    /// Primary preview source.
    pub fn tracks(mut self, tracks: Arc<dyn TrackSearch>) -> Self {
        self.tracks = Some(tracks);
        self
    }

    /// Fallback preview source.
    pub fn itunes(mut self, itunes: Arc<ItunesPreviewLookup>) -> Self {
        self.itunes = Some(itunes);
        self
    }

    /// Override the cache TTL (default: 1 hour).
    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Resolve the preview and YouTube links for `term` (e.g. `"Radiohead Creep"`).
    pub async fn lookup(&self, term: &str) -> PreviewLinks {
        let key = cache_key(PREVIEW_NAMESPACE, term);

        if let Some(links) = read_cached::<PreviewLinks>(&*self.store, PREVIEW_NAMESPACE, &key).await
        {
            record_outcome(PREVIEW_NAMESPACE, found_outcome(&links.preview_url));
            return links;
        }

        let preview_url = match self.catalogue_preview(term).await {
            Some(url) => Some(url),
            None => match &self.itunes {
                Some(itunes) => itunes.lookup(term).await,
                None => None,
            },
        };
        let youtube_url = self.videos.url(term).await;

        let links = PreviewLinks {
            preview_url,
            youtube_url,
        };
        write_cached(&*self.store, &key, &links, self.ttl).await;
        record_outcome(PREVIEW_NAMESPACE, found_outcome(&links.preview_url));
        links
    }

    async fn catalogue_preview(&self, term: &str) -> Option<String> {
        let tracks = self.tracks.as_ref()?;
        match tracks.search(term, 1).await {
            Ok(hits) => {
                let url = hits.into_iter().next().and_then(|t| t.preview_url);
                debug!(term, provider = tracks.name(), found = url.is_some(), "catalogue preview");
                url
            }
            Err(e) => {
                warn!(term, provider = tracks.name(), error = %e, "catalogue search failed");
                None
            }
        }
    }
}
