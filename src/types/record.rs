//! Classification result records.

use serde::{Deserialize, Serialize};

/// The result of classifying one text.
///
/// Failures never abort a batch: a failed item carries the fallback label
/// and the cause in `error`, and serialises alongside its successful
/// neighbours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationRecord {
    /// The original input text.
    pub text: String,
    /// Predicted label, a member of the configured label set.
    pub label: String,
    /// Model-reported confidence in `[0.0, 1.0]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Free-text justification returned alongside the label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
    /// Failure cause when classification did not succeed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ClassificationRecord {
    /// A successful classification.
    pub fn ok(
        text: impl Into<String>,
        label: impl Into<String>,
        confidence: Option<f64>,
        rationale: Option<String>,
    ) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
            confidence,
            rationale,
            error: None,
        }
    }

    /// A failed classification carrying the fallback label and the cause.
    pub fn failed(
        text: impl Into<String>,
        fallback_label: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            label: fallback_label.into(),
            confidence: None,
            rationale: None,
            error: Some(error.into()),
        }
    }

    /// Whether this record represents a successful classification.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_record_has_no_error() {
        let record = ClassificationRecord::ok("hi", "Inquiry", Some(0.9), None);
        assert!(record.is_ok());
        assert_eq!(record.label, "Inquiry");
    }

    #[test]
    fn failed_record_carries_fallback_and_cause() {
        let record = ClassificationRecord::failed("hi", "Other", "boom");
        assert!(!record.is_ok());
        assert_eq!(record.label, "Other");
        assert_eq!(record.error.as_deref(), Some("boom"));
        assert!(record.confidence.is_none());
    }

    #[test]
    fn serialization_skips_absent_fields() {
        let record = ClassificationRecord::ok("hi", "Feedback", None, None);
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("confidence"));
        assert!(!json.contains("rationale"));
        assert!(!json.contains("error"));
    }
}
