//! Prompt templating for classification requests.
//!
//! Templates carry `{labels}` and `{text}` placeholders. Rendering is plain
//! string substitution; there is no escaping layer, the model sees the text
//! verbatim inside quotes.

use crate::types::LabelSet;
use crate::{FlokkrError, Result};

/// System message sent with every classification request.
pub const SYSTEM_PROMPT: &str =
    "You are a precise text classification assistant. Always respond with valid JSON only.";

/// Default deterministic classification template.
///
/// Matches the default label set; config files carrying custom labels
/// usually override the template as well.
const DEFAULT_TEMPLATE: &str = r#"You are a text classification system. Classify the following text into exactly one of these categories: {labels}

Classification Rules:
- Complaint: Expresses dissatisfaction, problems, or negative experiences
- Inquiry: Asks questions, seeks information, or requests clarification
- Feedback: Provides suggestions, opinions, or general comments (positive or constructive)
- Other: Does not fit into the above categories

Text to classify: "{text}"

Respond with a JSON object containing:
1. "label": The exact category name (must match one of: {labels})
2. "confidence": A number between 0.0 and 1.0 indicating classification confidence
3. "rationale": A brief explanation (1-2 sentences) of why this classification was chosen

Response format (JSON only, no additional text):"#;

/// A classification prompt template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    template: String,
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

impl PromptTemplate {
    /// Create a template from a custom string.
    ///
    /// The template must contain a `{text}` placeholder; a template without
    /// one would silently classify nothing.
    pub fn new(template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        if !template.contains("{text}") {
            return Err(FlokkrError::Configuration(
                "prompt template is missing the {text} placeholder".to_string(),
            ));
        }
        Ok(Self { template })
    }

    /// Render the template for the given label set and input text.
    pub fn render(&self, labels: &LabelSet, text: &str) -> String {
        self.template
            .replace("{labels}", &labels.join(", "))
            .replace("{text}", text)
    }
}
