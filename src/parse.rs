//! JSON extraction from model output.
//!
//! Models are instructed to answer with a bare JSON object, but frequently
//! wrap it in a markdown code fence anyway. Extraction strips the fence,
//! parses the object, validates the label against the configured set, and
//! clamps confidence into `[0, 1]`.

use serde::Deserialize;

use crate::types::LabelSet;
use crate::{FlokkrError, Result};

/// A parsed and validated classification reply.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedReply {
    /// Label in the configured casing.
    pub label: String,
    pub confidence: Option<f64>,
    pub rationale: Option<String>,
}

/// The JSON shape the model is asked to produce.
#[derive(Deserialize)]
struct RawReply {
    label: Option<String>,
    confidence: Option<f64>,
    rationale: Option<String>,
}

/// Strip a surrounding markdown code fence, if present.
///
/// Handles ```` ```json ````, bare ```` ``` ````, and a trailing fence.
/// Anything else passes through trimmed.
pub fn strip_code_fence(raw: &str) -> &str {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix("```json") {
        text = rest;
    } else if let Some(rest) = text.strip_prefix("```") {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }
    text.trim()
}

/// Parse a model reply into a validated classification.
///
/// The reply must contain a `label` field matching the configured set
/// (case-insensitively). `confidence` and `rationale` are optional;
/// out-of-range confidence values are clamped rather than rejected.
pub fn parse_reply(raw: &str, labels: &LabelSet) -> Result<ParsedReply> {
    let body = strip_code_fence(raw);
    if body.is_empty() {
        return Err(FlokkrError::EmptyResponse);
    }

    let reply: RawReply = serde_json::from_str(body)
        .map_err(|e| FlokkrError::MalformedResponse(format!("failed to parse JSON reply: {e}")))?;

    let candidate = reply
        .label
        .ok_or_else(|| FlokkrError::MalformedResponse("reply missing 'label' field".to_string()))?;

    let label = labels
        .resolve(&candidate)
        .ok_or_else(|| FlokkrError::InvalidLabel {
            label: candidate.clone(),
            allowed: labels.join(", "),
        })?
        .to_string();

    let confidence = reply.confidence.map(|c| c.clamp(0.0, 1.0));

    Ok(ParsedReply {
        label,
        confidence,
        rationale: reply.rationale,
    })
}
