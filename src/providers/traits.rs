//! Provider traits for capability-specific implementations.
//!
//! Lookups depend on these traits rather than on concrete HTTP clients, so
//! the credential-bearing client is injected (or left out entirely) at
//! construction time and tests can substitute in-process fakes.
//!
//! # Error Semantics
//!
//! Providers return the raw upstream outcome:
//! - `Ok(None)` means the upstream answered and had no match
//! - `Err(Api { status: 4xx, .. })` means the upstream rejected the request
//! - any transient error (network, timeout, 5xx) is returned as-is
//!
//! Deciding what to cache is the lookup's job, not the provider's.

use async_trait::async_trait;

use crate::Result;
use crate::types::Track;

/// Search for a video matching free text.
#[async_trait]
pub trait VideoSearch: Send + Sync {
    /// Provider name for logging/metrics.
    fn name(&self) -> &str;

    /// Return the id of the first matching video, if any.
    async fn first_video_id(&self, term: &str) -> Result<Option<String>>;
}

/// Resolve a 30-second preview clip URL for free text.
#[async_trait]
pub trait PreviewSource: Send + Sync {
    /// Provider name for logging/metrics.
    fn name(&self) -> &str;

    /// Return the preview URL of the first matching track, if any.
    async fn preview_url(&self, term: &str) -> Result<Option<String>>;
}

/// Search a track catalogue.
#[async_trait]
pub trait TrackSearch: Send + Sync {
    /// Provider name for logging/metrics.
    fn name(&self) -> &str;

    /// Search tracks by free text, returning at most `limit` results.
    async fn search(&self, term: &str, limit: u32) -> Result<Vec<Track>>;
}
