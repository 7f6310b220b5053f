//! Integration tests for [`DeezerClient`] against a wiremock server.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use nexttrack::NextTrackError;
use nexttrack::providers::DeezerClient;

fn client(server: &MockServer) -> DeezerClient {
    DeezerClient::with_base_url(server.uri(), Duration::from_secs(2)).unwrap()
}

fn track_json(id: u64, title: &str, preview: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "duration": 200,
        "preview": preview,
        "artist": {"id": 1, "name": "Daft Punk"},
        "album": {"id": 2, "title": "Discovery", "cover_big": "big.jpg", "cover_xl": "xl.jpg"}
    })
}

#[tokio::test]
async fn search_normalizes_tracks() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "daft punk"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                track_json(3135556, "Harder, Better, Faster, Stronger", "https://cdn.example/a.mp3"),
                track_json(3135553, "One More Time", "")
            ],
            "total": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let tracks = client(&server).search_tracks("daft punk", 2).await.unwrap();
    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].id, "3135556");
    assert_eq!(tracks[0].artist, "Daft Punk");
    assert_eq!(tracks[0].preview_url.as_deref(), Some("https://cdn.example/a.mp3"));
    assert_eq!(tracks[0].art_url.as_deref(), Some("xl.jpg"));
    assert!(tracks[1].preview_url.is_none());
}

#[tokio::test]
async fn search_without_results_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [], "total": 0})))
        .mount(&server)
        .await;

    let tracks = client(&server).search_tracks("zzzz", 5).await.unwrap();
    assert!(tracks.is_empty());
}

#[tokio::test]
async fn in_body_error_becomes_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": {"type": "Exception", "message": "Quota limit exceeded", "code": 4}
        })))
        .mount(&server)
        .await;

    let err = client(&server).search_tracks("x", 1).await.unwrap_err();
    assert!(matches!(err, NextTrackError::Api { status: 400, .. }));
    assert!(err.to_string().contains("Quota limit exceeded"));
}

#[tokio::test]
async fn track_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/track/3135556"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(track_json(3135556, "Harder, Better, Faster, Stronger", "")),
        )
        .mount(&server)
        .await;

    let track = client(&server).track("3135556").await.unwrap();
    assert_eq!(track.title, "Harder, Better, Faster, Stronger");
    assert_eq!(track.album, "Discovery");
    assert_eq!(track.duration, Some(200));
}

#[tokio::test]
async fn unknown_track_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/track/0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": {"type": "DataException", "message": "no data", "code": 800}
        })))
        .mount(&server)
        .await;

    let err = client(&server).track("0").await.unwrap_err();
    assert!(matches!(err, NextTrackError::Api { status: 404, .. }));
    assert!(err.is_client_error());
}

#[tokio::test]
async fn http_failure_is_transient() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let err = client(&server).search_tracks("x", 1).await.unwrap_err();
    assert!(err.is_transient());
    assert!(err.to_string().contains("maintenance"));
}
