//! Telemetry metric name constants.
//!
//! Centralised metric names for nexttrack lookups. Consumers install their
//! own `metrics` recorder (e.g. prometheus, statsd); without a recorder
//! installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `nexttrack_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `namespace` — cache namespace (e.g. "ytid", "itunes", "prev")
//! - `provider` — upstream name (e.g. "youtube", "deezer", "itunes")
//! - `outcome` — lookup result: "found", "not_found", "failed", "unconfigured"

/// Total lookups resolved by a cache-aside unit.
///
/// Labels: `namespace`, `outcome`.
pub const LOOKUPS_TOTAL: &str = "nexttrack_lookups_total";

/// Total cache hits.
///
/// Labels: `namespace`.
pub const CACHE_HITS_TOTAL: &str = "nexttrack_cache_hits_total";

/// Total cache misses.
///
/// Labels: `namespace`.
pub const CACHE_MISSES_TOTAL: &str = "nexttrack_cache_misses_total";

/// Total upstream requests that ended in an error.
///
/// Labels: `provider`, `kind` ("client" | "transient" | "other").
pub const UPSTREAM_ERRORS_TOTAL: &str = "nexttrack_upstream_errors_total";

/// Upstream request duration in seconds.
///
/// Labels: `provider`.
pub const REQUEST_DURATION_SECONDS: &str = "nexttrack_request_duration_seconds";

/// Classify an error for the `kind` label of [`UPSTREAM_ERRORS_TOTAL`].
pub(crate) fn error_kind(err: &crate::NextTrackError) -> &'static str {
    if err.is_client_error() {
        "client"
    } else if err.is_transient() {
        "transient"
    } else {
        "other"
    }
}
