//! iTunes Search API client for 30-second preview clips.
//!
//! See: <https://performance-partners.apple.com/search-api>

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::http;
use super::traits::PreviewSource;
use crate::Result;

/// Default base URL for the iTunes Search API
pub const DEFAULT_BASE_URL: &str = "https://itunes.apple.com";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(4);

/// Default storefront country.
pub const DEFAULT_COUNTRY: &str = "us";

// iTunes answers bursts from unknown agents with 403.
const USER_AGENT: &str = "Mozilla/5.0";

/// Client for the iTunes Search API.
#[derive(Clone)]
pub struct ItunesClient {
    http: Client,
    base_url: String,
    country: String,
}

impl ItunesClient {
    /// Create a client against the public endpoint.
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom base URL and timeout (for testing with wiremock).
    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            http: http::build_client(timeout, Some(USER_AGENT))?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            country: DEFAULT_COUNTRY.to_string(),
        })
    }

    /// Use a different storefront country (two-letter code).
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Preview URL of the first music match for `term`.
    pub async fn first_preview(&self, term: &str) -> Result<Option<String>> {
        let url = format!("{}/search", self.base_url);

        let request = self.http.get(&url).query(&[
            ("term", term),
            ("media", "music"),
            ("limit", "1"),
            ("country", self.country.as_str()),
        ]);

        let response: SearchResponse = http::get_json("itunes", request).await?;
        Ok(response
            .results
            .into_iter()
            .next()
            .and_then(|r| r.preview_url))
    }
}

#[async_trait]
impl PreviewSource for ItunesClient {
    fn name(&self) -> &str {
        "itunes"
    }

    async fn preview_url(&self, term: &str) -> Result<Option<String>> {
        self.first_preview(term).await
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResult {
    preview_url: Option<String>,
}
