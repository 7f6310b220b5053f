//! Shared request helper for the JSON APIs.

use std::time::{Duration, Instant};

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::telemetry;
use crate::{NextTrackError, Result};

/// Longest error body kept in an `Api` error message.
const MAX_ERROR_BODY: usize = 512;

/// Build a client whose every request is bounded by `timeout`.
pub(crate) fn build_client(timeout: Duration, user_agent: Option<&str>) -> Result<Client> {
    let mut builder = Client::builder().timeout(timeout);
    if let Some(ua) = user_agent {
        builder = builder.user_agent(ua);
    }
    builder
        .build()
        .map_err(|e| NextTrackError::Configuration(format!("failed to build HTTP client: {e}")))
}

/// Send a request and decode a JSON body, recording duration and errors.
pub(crate) async fn get_json<T: DeserializeOwned>(
    provider: &'static str,
    request: RequestBuilder,
) -> Result<T> {
    let started = Instant::now();
    let result = send(request).await;

    metrics::histogram!(telemetry::REQUEST_DURATION_SECONDS, "provider" => provider)
        .record(started.elapsed().as_secs_f64());
    if let Err(e) = &result {
        metrics::counter!(telemetry::UPSTREAM_ERRORS_TOTAL,
            "provider" => provider,
            "kind" => telemetry::error_kind(e),
        )
        .increment(1);
    }

    result
}

async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
    let response = request.send().await?;

    let status = response.status();
    if !status.is_success() {
        let mut message = response.text().await.unwrap_or_default();
        if message.len() > MAX_ERROR_BODY {
            let cut = (0..=MAX_ERROR_BODY)
                .rev()
                .find(|&i| message.is_char_boundary(i))
                .unwrap_or(0);
            message.truncate(cut);
        }
        return Err(NextTrackError::Api {
            status: status.as_u16(),
            message,
        });
    }

    Ok(response.json().await?)
}
