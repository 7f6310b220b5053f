//! Shared data types.

mod track;

pub use track::{PreviewLinks, Track};
