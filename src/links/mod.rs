//! The link resolver consumed by the web layer.
//!
//! [`MediaLinks`] wires the providers and lookup units over one shared
//! cache store. Build it with [`NextTrack::builder()`].

mod builder;

pub use builder::{NextTrack, NextTrackBuilder};

use std::sync::Arc;

use crate::Result;
use crate::cache::CacheStore;
use crate::lookup::{ItunesPreviewLookup, PreviewLookup, VideoLookup};
use crate::providers::DeezerClient;
use crate::types::{PreviewLinks, Track};

/// Resolves YouTube and preview links for songs.
pub struct MediaLinks {
    store: Arc<dyn CacheStore>,
    videos: Arc<VideoLookup>,
    itunes: Arc<ItunesPreviewLookup>,
    previews: PreviewLookup,
    deezer: Arc<DeezerClient>,
}

impl MediaLinks {
    /// First matching YouTube video id for `term`, or `None`.
    pub async fn youtube_id(&self, term: &str) -> Option<String> {
        self.videos.lookup(term).await
    }

    /// Watch URL for `term`, or a YouTube search-results URL.
    pub async fn youtube_url(&self, term: &str) -> String {
        self.videos.url(term).await
    }

    /// Preview clip and YouTube links for `term`.
    pub async fn preview(&self, term: &str) -> PreviewLinks {
        self.previews.lookup(term).await
    }

    /// iTunes preview URL for `term`, or `None`.
    pub async fn itunes_preview(&self, term: &str) -> Option<String> {
        self.itunes.lookup(term).await
    }

    /// Search the Deezer catalogue. Unlike the lookups, errors propagate.
    pub async fn search_tracks(&self, term: &str, limit: u32) -> Result<Vec<Track>> {
        self.deezer.search_tracks(term, limit).await
    }

    /// Fetch a Deezer track by id.
    pub async fn track(&self, track_id: &str) -> Result<Track> {
        self.deezer.track(track_id).await
    }

    /// Whether YouTube lookups can go upstream.
    pub fn youtube_configured(&self) -> bool {
        self.videos.is_configured()
    }

    /// The shared cache store.
    pub fn store(&self) -> &Arc<dyn CacheStore> {
        &self.store
    }
}
