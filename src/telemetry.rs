//! Telemetry metric name constants.
//!
//! Centralised metric names for flokkr operations. Consumers install their
//! own `metrics` recorder (e.g. prometheus, statsd); without a recorder
//! installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `flokkr_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `provider` — provider name (e.g. "openai")
//! - `operation` — operation invoked (e.g. "classify", "complete")
//! - `status` — outcome: "ok" or "error"

/// Total classification requests processed.
///
/// Labels: `provider`, `status` ("ok" | "error").
pub const CLASSIFICATIONS_TOTAL: &str = "flokkr_classifications_total";

/// Classification duration in seconds, including the provider round trip.
///
/// Labels: `provider`.
pub const CLASSIFICATION_DURATION_SECONDS: &str = "flokkr_classification_duration_seconds";

/// Total retry attempts (not counting the initial request).
///
/// Labels: `provider`, `operation`.
pub const RETRIES_TOTAL: &str = "flokkr_retries_total";

/// Total tokens consumed, as reported by the provider.
///
/// Labels: `provider`, `direction` ("prompt" | "completion").
pub const TOKENS_TOTAL: &str = "flokkr_tokens_total";
