//! Label set types.
//!
//! A label set is the finite, ordered collection of categories the
//! classifier may answer with. The last label doubles as the fallback
//! assigned to records that fail classification.

use serde::{Deserialize, Serialize};

use crate::{FlokkrError, Result};

/// An ordered set of classification labels.
///
/// At least two labels are required. Membership checks are
/// case-insensitive but resolution always returns the configured casing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelSet {
    labels: Vec<String>,
}

impl Default for LabelSet {
    fn default() -> Self {
        Self {
            labels: ["Complaint", "Inquiry", "Feedback", "Other"]
                .map(String::from)
                .to_vec(),
        }
    }
}

impl LabelSet {
    /// Create a label set from the given labels.
    ///
    /// Returns an error if fewer than two non-empty labels are provided.
    pub fn new(labels: Vec<String>) -> Result<Self> {
        let labels: Vec<String> = labels
            .into_iter()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect();
        if labels.len() < 2 {
            return Err(FlokkrError::Configuration(
                "at least 2 labels are required for classification".to_string(),
            ));
        }
        Ok(Self { labels })
    }

    /// Resolve a candidate label against the set.
    ///
    /// Exact matches win; otherwise a case-insensitive match returns the
    /// configured casing. `None` means the candidate is not in the set.
    pub fn resolve(&self, candidate: &str) -> Option<&str> {
        if let Some(exact) = self.labels.iter().find(|l| *l == candidate) {
            return Some(exact);
        }
        self.labels
            .iter()
            .find(|l| l.eq_ignore_ascii_case(candidate))
            .map(String::as_str)
    }

    /// The fallback label assigned to records that fail classification.
    ///
    /// By convention this is the last label in the set ("Other" in the
    /// default set).
    pub fn fallback(&self) -> &str {
        self.labels.last().map(String::as_str).unwrap_or("Other")
    }

    /// Labels joined for prompt interpolation and error messages.
    pub fn join(&self, sep: &str) -> String {
        self.labels.join(sep)
    }

    /// Iterate over the labels in configured order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// Number of labels in the set.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the set is empty (never true for a validated set).
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The labels as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.labels
    }
}
