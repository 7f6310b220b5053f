//! Builder for configuring link resolvers

use std::sync::Arc;
use std::time::Duration;

use super::MediaLinks;
use crate::Result;
use crate::cache::{CacheStore, MemoryStore};
use crate::config::Config;
use crate::lookup::{ItunesPreviewLookup, PreviewLookup, VideoLookup};
use crate::providers::{DeezerClient, ItunesClient, VideoSearch, YouTubeClient, deezer, itunes, youtube};

/// Main entry point for creating link resolvers.
pub struct NextTrack;

impl NextTrack {
    /// Create a new builder for configuring the resolver.
    pub fn builder() -> NextTrackBuilder {
        NextTrackBuilder::new()
    }
}

/// Builder for configuring [`MediaLinks`] instances.
pub struct NextTrackBuilder {
    youtube_key: Option<String>,
    youtube_url: String,
    youtube_timeout: Duration,
    deezer_url: String,
    deezer_timeout: Duration,
    itunes_url: String,
    itunes_timeout: Duration,
    itunes_country: String,
    store: Option<Arc<dyn CacheStore>>,
    max_entries: u64,
}

impl NextTrackBuilder {
    /// Builder with default endpoints and no YouTube key.
    pub fn new() -> Self {
        Self {
            youtube_key: None,
            youtube_url: youtube::DEFAULT_BASE_URL.to_string(),
            youtube_timeout: youtube::DEFAULT_TIMEOUT,
            deezer_url: deezer::DEFAULT_BASE_URL.to_string(),
            deezer_timeout: deezer::DEFAULT_TIMEOUT,
            itunes_url: itunes::DEFAULT_BASE_URL.to_string(),
            itunes_timeout: itunes::DEFAULT_TIMEOUT,
            itunes_country: itunes::DEFAULT_COUNTRY.to_string(),
            store: None,
            max_entries: 10_000,
        }
    }

    /// Start from a loaded [`Config`], including its YouTube key resolution.
    pub fn from_config(config: &Config) -> Self {
        let mut builder = Self::new()
            .youtube_base_url(&config.youtube.base_url)
            .youtube_timeout(config.youtube.timeout())
            .deezer_base_url(&config.deezer.base_url)
            .deezer_timeout(config.deezer.timeout())
            .itunes_base_url(&config.itunes.base_url)
            .itunes_timeout(config.itunes.timeout())
            .itunes_country(&config.itunes.country)
            .max_entries(config.cache.max_entries);
        builder.youtube_key = config.youtube_api_key();
        builder
    }

    /// Enable YouTube video lookups. Without a key they never go upstream.
    pub fn youtube_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.youtube_key = Some(api_key.into());
        self
    }

    /// Override the YouTube Data API base URL.
    pub fn youtube_base_url(mut self, url: impl Into<String>) -> Self {
        self.youtube_url = url.into();
        self
    }

    /// Request timeout for YouTube searches (default: 5s).
    pub fn youtube_timeout(mut self, timeout: Duration) -> Self {
        self.youtube_timeout = timeout;
        self
    }

    /// Override the Deezer API base URL.
    pub fn deezer_base_url(mut self, url: impl Into<String>) -> Self {
        self.deezer_url = url.into();
        self
    }

    /// Request timeout for Deezer (default: 10s).
    pub fn deezer_timeout(mut self, timeout: Duration) -> Self {
        self.deezer_timeout = timeout;
        self
    }

    /// Override the iTunes Search base URL.
    pub fn itunes_base_url(mut self, url: impl Into<String>) -> Self {
        self.itunes_url = url.into();
        self
    }

    /// Request timeout for iTunes (default: 4s).
    pub fn itunes_timeout(mut self, timeout: Duration) -> Self {
        self.itunes_timeout = timeout;
        self
    }

    /// iTunes storefront country code (default: "us").
    pub fn itunes_country(mut self, country: impl Into<String>) -> Self {
        self.itunes_country = country.into();
        self
    }

    /// Share an existing store instead of allocating a [`MemoryStore`].
    pub fn store(mut self, store: Arc<dyn CacheStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Capacity of the default [`MemoryStore`]. Ignored with [`store`](Self::store).
    pub fn max_entries(mut self, max: u64) -> Self {
        self.max_entries = max;
        self
    }

    /// Build the resolver.
    pub fn build(self) -> Result<MediaLinks> {
        let store: Arc<dyn CacheStore> = match self.store {
            Some(store) => store,
            None => Arc::new(MemoryStore::with_max_entries(self.max_entries)),
        };

        let search: Option<Arc<dyn VideoSearch>> = match self.youtube_key {
            Some(key) if !key.trim().is_empty() => {
                let client =
                    YouTubeClient::with_base_url(key, self.youtube_url, self.youtube_timeout)?;
                Some(Arc::new(client) as Arc<dyn VideoSearch>)
            }
            _ => None,
        };
        let videos = Arc::new(VideoLookup::new(store.clone(), search));

        let itunes_client = Arc::new(
            ItunesClient::with_base_url(self.itunes_url, self.itunes_timeout)?
                .country(self.itunes_country),
        );
        let itunes = Arc::new(ItunesPreviewLookup::new(store.clone(), itunes_client));

        let deezer = Arc::new(DeezerClient::with_base_url(self.deezer_url, self.deezer_timeout)?);

        let previews = PreviewLookup::new(store.clone(), videos.clone())
            .tracks(deezer.clone())
            .itunes(itunes.clone());

        Ok(MediaLinks {
            store,
            videos,
            itunes,
            previews,
            deezer,
        })
    }
}

impl Default for NextTrackBuilder {
    fn default() -> Self {
        Self::new()
    }
}
