//! Normalized track records.

use serde::{Deserialize, Serialize};

/// A catalogue track, normalized across providers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Provider that supplied the record (e.g. "deezer").
    pub provider: String,
    /// Provider-specific track id.
    pub id: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    /// 30-second MP3 preview, when the provider has one.
    #[serde(default)]
    pub preview_url: Option<String>,
    /// Largest available album artwork.
    #[serde(default)]
    pub art_url: Option<String>,
    #[serde(default)]
    pub isrc: Option<String>,
    /// Duration in seconds.
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub bpm: Option<f32>,
}

impl Track {
    /// `"Artist Title"`, the form used as a search term by the lookups.
    pub fn search_term(&self) -> String {
        format!("{} {}", self.artist, self.title)
    }
}

/// Links shown next to a track: an optional preview clip and a YouTube URL.
///
/// The YouTube URL is always present: a watch link when a video id was
/// found, otherwise a search-results link for the term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewLinks {
    pub preview_url: Option<String>,
    pub youtube_url: String,
}
