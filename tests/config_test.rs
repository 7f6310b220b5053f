//! Tests for loading [`Config`] from disk and building from it.

use std::io::Write;

use nexttrack::config::YOUTUBE_API_KEY_ENV;
use nexttrack::{Config, NextTrackBuilder};

#[test]
fn load_explicit_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
        [youtube]
        api_key = "from-file"
        timeout_secs = 3

        [itunes]
        country = "jp"
        "#
    )
    .unwrap();

    let config = Config::load(Some(file.path())).unwrap();
    assert_eq!(config.youtube.api_key.as_deref(), Some("from-file"));
    assert_eq!(config.youtube.timeout_secs, 3);
    assert_eq!(config.itunes.country, "jp");
    assert_eq!(config.deezer.base_url, "https://api.deezer.com");
}

#[test]
fn invalid_toml_is_a_configuration_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[youtube\napi_key = ").unwrap();

    let err = Config::load(Some(file.path())).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn wrong_type_is_a_configuration_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[cache]\nmax_entries = \"lots\"").unwrap();

    assert!(Config::load(Some(file.path())).is_err());
}

#[test]
fn zero_timeout_is_a_configuration_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[youtube]\ntimeout_secs = 0").unwrap();

    let err = Config::load(Some(file.path())).unwrap_err();
    assert!(err.to_string().contains("[youtube] timeout_secs"));
}

// The only test in this binary that touches the process environment.
#[test]
fn env_key_takes_precedence_over_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[youtube]\napi_key = \"from-file\"").unwrap();
    let config = Config::load(Some(file.path())).unwrap();

    unsafe { std::env::set_var(YOUTUBE_API_KEY_ENV, "from-env") };
    assert_eq!(config.youtube_api_key().as_deref(), Some("from-env"));

    unsafe { std::env::set_var(YOUTUBE_API_KEY_ENV, "   ") };
    assert_eq!(config.youtube_api_key().as_deref(), Some("from-file"));

    unsafe { std::env::remove_var(YOUTUBE_API_KEY_ENV) };
    assert_eq!(config.youtube_api_key().as_deref(), Some("from-file"));
}

#[tokio::test]
async fn builder_from_config_enables_youtube() {
    let config: Config = toml::from_str(
        r#"
        [youtube]
        api_key = "from-file"
        "#,
    )
    .unwrap();

    let links = NextTrackBuilder::from_config(&config).build().unwrap();
    assert!(links.youtube_configured());
}
