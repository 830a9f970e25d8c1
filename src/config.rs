//! Classifier configuration loading.
//!
//! The classifier config is a JSON file with optional `labels` and
//! `prompt_template` keys:
//!
//! ```json
//! {
//!   "labels": ["Bug", "Feature", "Question"],
//!   "prompt_template": "Classify into {labels}: {text}"
//! }
//! ```
//!
//! Absent keys fall back to the built-in defaults. API keys are not stored
//! in config files; they come from the environment or an explicit value.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::prompt::PromptTemplate;
use crate::types::LabelSet;
use crate::{FlokkrError, Result};

/// Environment variable consulted for the API key.
pub const API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";

/// Classifier configuration file contents.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassifierConfig {
    #[serde(default)]
    pub labels: Option<Vec<String>>,
    #[serde(default)]
    pub prompt_template: Option<String>,
}

impl ClassifierConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            FlokkrError::Configuration(format!("failed to read config file {path:?}: {e}"))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            FlokkrError::Configuration(format!("failed to parse config file {path:?}: {e}"))
        })
    }

    /// The configured label set, or the default set when absent.
    pub fn label_set(&self) -> Result<LabelSet> {
        match &self.labels {
            Some(labels) => LabelSet::new(labels.clone()),
            None => Ok(LabelSet::default()),
        }
    }

    /// The configured prompt template, or the default when absent.
    pub fn template(&self) -> Result<PromptTemplate> {
        match &self.prompt_template {
            Some(template) => PromptTemplate::new(template.clone()),
            None => Ok(PromptTemplate::default()),
        }
    }
}

/// Resolve the API key from an explicit value or the environment.
///
/// An explicit non-empty key wins; otherwise `OPENAI_API_KEY` is consulted.
pub fn resolve_api_key(explicit: Option<&str>) -> Result<String> {
    if let Some(key) = explicit {
        let key = key.trim();
        if !key.is_empty() {
            return Ok(key.to_string());
        }
    }
    match std::env::var(API_KEY_ENV_VAR) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(FlokkrError::MissingApiKey),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_yields_defaults() {
        let config = ClassifierConfig::default();
        let labels = config.label_set().unwrap();
        assert_eq!(labels.len(), 4);
        assert!(config.template().is_ok());
    }

    #[test]
    fn parse_full_config() {
        let json = r#"{
            "labels": ["Bug", "Feature"],
            "prompt_template": "Pick {labels} for {text}"
        }"#;
        let config: ClassifierConfig = serde_json::from_str(json).unwrap();
        let labels = config.label_set().unwrap();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels.fallback(), "Feature");
        assert!(config.template().is_ok());
    }

    #[test]
    fn single_label_config_is_rejected() {
        let json = r#"{"labels": ["Only"]}"#;
        let config: ClassifierConfig = serde_json::from_str(json).unwrap();
        assert!(config.label_set().is_err());
    }

    #[test]
    fn explicit_key_wins() {
        assert_eq!(resolve_api_key(Some("sk-test")).unwrap(), "sk-test");
    }

    #[test]
    fn blank_explicit_key_falls_through() {
        // With neither an explicit key nor the env var, resolution fails.
        // (Avoids reading the env var directly so a developer's real key
        // doesn't affect the test.)
        if std::env::var(API_KEY_ENV_VAR).is_err() {
            assert!(matches!(
                resolve_api_key(Some("   ")),
                Err(FlokkrError::MissingApiKey)
            ));
        }
    }
}
