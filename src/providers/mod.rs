//! Upstream HTTP clients.
//!
//! One client per external API, each implementing the capability trait the
//! lookups consume:
//!
//! | Client | Trait | Credential |
//! |---|---|---|
//! | [`YouTubeClient`] | [`VideoSearch`] | API key |
//! | [`ItunesClient`] | [`PreviewSource`] | none |
//! | [`DeezerClient`] | [`TrackSearch`] | none |
//!
//! Every client sets an explicit request timeout and accepts a base URL
//! override so tests can point it at a mock server.

pub mod deezer;
mod http;
pub mod itunes;
pub mod traits;
pub mod youtube;

pub use deezer::DeezerClient;
pub use itunes::ItunesClient;
pub use traits::{PreviewSource, TrackSearch, VideoSearch};
pub use youtube::YouTubeClient;
