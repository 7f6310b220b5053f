//! nexttrack - song link lookups with cache-aside caching
//!
//! Resolves the links shown next to a recommended song: a YouTube video id
//! (or a search fallback link) and a 30-second preview clip. Every lookup
//! checks a shared [`CacheStore`](cache::CacheStore) first and writes the
//! upstream outcome back with a TTL, so repeated renders of the same song
//! cost at most one API call per TTL window.
//!
//! # Example
//!
//! ```rust,no_run
//! use nexttrack::NextTrack;
//!
//! #[tokio::main]
//! async fn main() -> nexttrack::Result<()> {
//!     let links = NextTrack::builder()
//!         .youtube_api_key("your-youtube-data-api-key")
//!         .build()?;
//!
//!     match links.youtube_id("Radiohead Creep").await {
//!         Some(id) => println!("https://www.youtube.com/watch?v={id}"),
//!         None => println!("{}", links.youtube_url("Radiohead Creep").await),
//!     }
//!
//!     let preview = links.preview("Radiohead Creep").await;
//!     println!("{:?}", preview.preview_url);
//!     Ok(())
//! }
//! ```
//!
//! Lookups never return errors: a missing API key, a rejected request or
//! a network failure all resolve to "no result".

pub mod cache;
pub mod config;
pub mod error;
pub mod links;
pub mod lookup;
pub mod pitch;
pub mod providers;
pub mod telemetry;
pub mod types;

// Re-export main types at crate root
pub use cache::{CacheStore, MemoryStore};
pub use config::Config;
pub use error::{NextTrackError, Result};
pub use links::{MediaLinks, NextTrack, NextTrackBuilder};
pub use lookup::{ItunesPreviewLookup, PreviewLookup, VideoLookup};
pub use pitch::VocalRange;
pub use types::{PreviewLinks, Track};

/// Package version from Cargo.toml.
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
