//! Completion options and response types.

use serde::{Deserialize, Serialize};

/// Options for completion requests (provider-agnostic).
///
/// Defaults are tuned for deterministic classification: temperature 0.0,
/// bounded output, JSON-object response format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionOptions {
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<usize>,
    /// Ask the provider to force a JSON object response.
    pub json_response: bool,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            model: String::new(),
            temperature: Some(0.0),
            max_tokens: Some(200),
            json_response: true,
        }
    }
}

impl CompletionOptions {
    /// Create options for the given model with classification defaults.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Self::default()
        }
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }

    pub fn max_tokens(mut self, max: usize) -> Self {
        self.max_tokens = Some(max);
        self
    }

    pub fn json_response(mut self, json: bool) -> Self {
        self.json_response = json;
        self
    }
}

/// Non-streaming completion response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Completion {
    /// The raw text the model produced.
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

/// Token usage statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}
