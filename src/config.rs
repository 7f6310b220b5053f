//! Configuration loading.
//!
//! Configuration is loaded from a TOML file with the following resolution order:
//! 1. explicit path (CLI `--config`)
//! 2. `~/.nexttrack/config.toml` (user)
//! 3. built-in defaults
//!
//! The YouTube API key may live in the file (`[youtube] api_key`) or in the
//! `YOUTUBE_API_KEY` environment variable; the environment wins. Without a
//! key, video lookups never go upstream.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::providers::{deezer, itunes, youtube};
use crate::{NextTrackError, Result};

/// Environment variable consulted for the YouTube API key.
pub const YOUTUBE_API_KEY_ENV: &str = "YOUTUBE_API_KEY";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub youtube: YouTubeConfig,
    #[serde(default)]
    pub deezer: ProviderConfig,
    #[serde(default)]
    pub itunes: ItunesConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

/// YouTube Data API settings.
#[derive(Debug, Clone, Deserialize)]
pub struct YouTubeConfig {
    /// API key; `YOUTUBE_API_KEY` takes precedence when set.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_youtube_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 5).
    #[serde(default = "default_youtube_timeout")]
    pub timeout_secs: u64,
}

impl Default for YouTubeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_youtube_url(),
            timeout_secs: default_youtube_timeout(),
        }
    }
}

fn default_youtube_url() -> String {
    youtube::DEFAULT_BASE_URL.to_string()
}

fn default_youtube_timeout() -> u64 {
    youtube::DEFAULT_TIMEOUT.as_secs()
}

/// Deezer settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "default_deezer_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 10).
    #[serde(default = "default_deezer_timeout")]
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_deezer_url(),
            timeout_secs: default_deezer_timeout(),
        }
    }
}

fn default_deezer_url() -> String {
    deezer::DEFAULT_BASE_URL.to_string()
}

fn default_deezer_timeout() -> u64 {
    deezer::DEFAULT_TIMEOUT.as_secs()
}

/// iTunes Search settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ItunesConfig {
    #[serde(default = "default_itunes_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 4).
    #[serde(default = "default_itunes_timeout")]
    pub timeout_secs: u64,
    /// Storefront country (default: "us").
    #[serde(default = "default_country")]
    pub country: String,
}

impl Default for ItunesConfig {
    fn default() -> Self {
        Self {
            base_url: default_itunes_url(),
            timeout_secs: default_itunes_timeout(),
            country: default_country(),
        }
    }
}

fn default_itunes_url() -> String {
    itunes::DEFAULT_BASE_URL.to_string()
}

fn default_itunes_timeout() -> u64 {
    itunes::DEFAULT_TIMEOUT.as_secs()
}

fn default_country() -> String {
    itunes::DEFAULT_COUNTRY.to_string()
}

/// In-memory cache settings.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of entries (default: 10,000).
    #[serde(default = "default_max_entries")]
    pub max_entries: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
        }
    }
}

fn default_max_entries() -> u64 {
    10_000
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// An explicit path must exist. Without one, the user config is used
    /// when present and defaults otherwise.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        match Self::resolve_config_path(explicit_path)? {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Parse a specific config file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            NextTrackError::Configuration(format!("Failed to read config file {path:?}: {e}"))
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| {
            NextTrackError::Configuration(format!("Failed to parse config file {path:?}: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would leave a provider unusable.
    pub fn validate(&self) -> Result<()> {
        for (section, secs) in [
            ("youtube", self.youtube.timeout_secs),
            ("deezer", self.deezer.timeout_secs),
            ("itunes", self.itunes.timeout_secs),
        ] {
            if secs == 0 {
                return Err(NextTrackError::Configuration(format!(
                    "[{section}] timeout_secs must be at least 1"
                )));
            }
        }
        Ok(())
    }

    fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if path.exists() {
                return Ok(Some(path.to_path_buf()));
            }
            return Err(NextTrackError::Configuration(format!(
                "Config file not found: {path:?}"
            )));
        }

        Ok(dirs::home_dir()
            .map(|home| home.join(".nexttrack").join("config.toml"))
            .filter(|path| path.exists()))
    }

    /// YouTube API key from `YOUTUBE_API_KEY`, falling back to the file.
    ///
    /// Blank values count as unset.
    pub fn youtube_api_key(&self) -> Option<String> {
        pick_api_key(
            std::env::var(YOUTUBE_API_KEY_ENV).ok(),
            self.youtube.api_key.clone(),
        )
    }
}

fn pick_api_key(env: Option<String>, file: Option<String>) -> Option<String> {
    let set = |key: &String| !key.trim().is_empty();
    env.filter(set).or_else(|| file.filter(set))
}

impl YouTubeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl ProviderConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl ItunesConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
