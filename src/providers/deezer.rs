//! Deezer public API client.
//!
//! No credentials are needed. See: <https://developers.deezer.com/api>
//!
//! Deezer reports most failures as HTTP 200 with an `error` object in the
//! body; those are mapped to [`NextTrackError::Api`] here.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::http;
use super::traits::TrackSearch;
use crate::types::Track;
use crate::{NextTrackError, Result};

/// Default base URL for the Deezer API
pub const DEFAULT_BASE_URL: &str = "https://api.deezer.com";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Deezer's "no data" error code.
const NO_DATA_CODE: i64 = 800;

/// Client for the Deezer public API.
#[derive(Clone)]
pub struct DeezerClient {
    http: Client,
    base_url: String,
}

impl DeezerClient {
    /// Create a client against the public endpoint.
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom base URL and timeout (for testing with wiremock).
    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            http: http::build_client(timeout, None)?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Search tracks by free text.
    pub async fn search_tracks(&self, term: &str, limit: u32) -> Result<Vec<Track>> {
        let url = format!("{}/search", self.base_url);
        let limit = limit.to_string();
        let request = self
            .http
            .get(&url)
            .query(&[("q", term), ("limit", limit.as_str())]);

        let response: SearchResponse = http::get_json("deezer", request).await?;
        if let Some(err) = response.error {
            return Err(err.into());
        }
        Ok(response.data.into_iter().map(Track::from).collect())
    }

    /// Fetch a single track by Deezer id.
    pub async fn track(&self, track_id: &str) -> Result<Track> {
        let url = format!("{}/track/{}", self.base_url, track_id);
        let request = self.http.get(&url);

        let response: TrackResponse = http::get_json("deezer", request).await?;
        match response {
            TrackResponse::Error { error } => Err(error.into()),
            TrackResponse::Track(track) => Ok(Track::from(*track)),
        }
    }
}

#[async_trait]
impl TrackSearch for DeezerClient {
    fn name(&self) -> &str {
        "deezer"
    }

    async fn search(&self, term: &str, limit: u32) -> Result<Vec<Track>> {
        self.search_tracks(term, limit).await
    }
}

// ============================================================================
// Response types
// ============================================================================

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<DeezerTrack>,
    #[serde(default)]
    error: Option<DeezerError>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TrackResponse {
    Error { error: DeezerError },
    Track(Box<DeezerTrack>),
}

#[derive(Debug, Deserialize)]
struct DeezerError {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    code: i64,
}

impl From<DeezerError> for NextTrackError {
    fn from(err: DeezerError) -> Self {
        let status = if err.code == NO_DATA_CODE { 404 } else { 400 };
        NextTrackError::Api {
            status,
            message: format!("{}: {} (code {})", err.kind, err.message, err.code),
        }
    }
}

#[derive(Debug, Deserialize)]
struct DeezerTrack {
    id: u64,
    title: String,
    artist: DeezerArtist,
    album: DeezerAlbum,
    #[serde(default)]
    preview: Option<String>,
    #[serde(default)]
    isrc: Option<String>,
    #[serde(default)]
    duration: Option<u32>,
    #[serde(default)]
    bpm: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct DeezerArtist {
    name: String,
}

#[derive(Debug, Deserialize)]
struct DeezerAlbum {
    title: String,
    #[serde(default)]
    cover_xl: Option<String>,
    #[serde(default)]
    cover_big: Option<String>,
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.is_empty())
}

impl From<DeezerTrack> for Track {
    fn from(t: DeezerTrack) -> Self {
        Track {
            provider: "deezer".to_string(),
            id: t.id.to_string(),
            title: t.title,
            artist: t.artist.name,
            album: t.album.title,
            preview_url: non_empty(t.preview),
            art_url: non_empty(t.album.cover_xl).or_else(|| non_empty(t.album.cover_big)),
            isrc: non_empty(t.isrc),
            duration: t.duration,
            // Deezer reports 0 when it has no tempo analysis.
            bpm: t.bpm.filter(|bpm| *bpm > 0.0),
        }
    }
}
