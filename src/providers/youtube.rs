//! YouTube Data API v3 search client.
//!
//! See: <https://developers.google.com/youtube/v3/docs/search/list>

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::http;
use super::traits::VideoSearch;
use crate::Result;

/// Default base URL for the YouTube Data API
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// YouTube's "Music" video category.
const MUSIC_CATEGORY_ID: &str = "10";

/// Only the first hit is ever used.
const MAX_RESULTS: &str = "1";

/// Client for the YouTube search endpoint.
///
/// Searches are restricted to videos in the music category and capped at a
/// single result.
#[derive(Clone)]
pub struct YouTubeClient {
    api_key: String,
    http: Client,
    base_url: String,
}

impl YouTubeClient {
    /// Create a new YouTube client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom base URL and timeout (for testing with wiremock).
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        Ok(Self {
            api_key: api_key.into(),
            http: http::build_client(timeout, None)?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Search for videos and return the first video id, if any.
    pub async fn search_first(&self, term: &str) -> Result<Option<String>> {
        let url = format!("{}/search", self.base_url);

        let request = self.http.get(&url).query(&[
            ("key", self.api_key.as_str()),
            ("part", "snippet"),
            ("type", "video"),
            ("videoCategoryId", MUSIC_CATEGORY_ID),
            ("maxResults", MAX_RESULTS),
            ("q", term),
        ]);

        let response: SearchResponse = http::get_json("youtube", request).await?;
        Ok(response.first_video_id())
    }
}

#[async_trait]
impl VideoSearch for YouTubeClient {
    fn name(&self) -> &str {
        "youtube"
    }

    async fn first_video_id(&self, term: &str) -> Result<Option<String>> {
        self.search_first(term).await
    }
}

// ============================================================================
// Response types
// ============================================================================

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: ResourceId,
}

#[derive(Debug, Deserialize)]
struct ResourceId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

impl SearchResponse {
    fn first_video_id(self) -> Option<String> {
        self.items.into_iter().next().and_then(|item| item.id.video_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_first_video_id() {
        let json = r#"{
            "kind": "youtube#searchListResponse",
            "items": [
                {"kind": "youtube#searchResult", "id": {"kind": "youtube#video", "videoId": "XFkzRNyygfk"}},
                {"kind": "youtube#searchResult", "id": {"kind": "youtube#video", "videoId": "other"}}
            ]
        }"#;
        let parsed: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.first_video_id().as_deref(), Some("XFkzRNyygfk"));
    }

    #[test]
    fn empty_or_missing_items_is_none() {
        let parsed: SearchResponse = serde_json::from_str(r#"{"items": []}"#).unwrap();
        assert!(parsed.first_video_id().is_none());

        let parsed: SearchResponse = serde_json::from_str(r#"{"kind": "x"}"#).unwrap();
        assert!(parsed.first_video_id().is_none());
    }

    #[test]
    fn item_without_video_id_is_none() {
        let json = r#"{"items": [{"id": {"kind": "youtube#channel", "channelId": "UC1"}}]}"#;
        let parsed: SearchResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.first_video_id().is_none());
    }
}
