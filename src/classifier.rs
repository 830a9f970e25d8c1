//! The classification pipeline.
//!
//! [`Classifier`] owns the provider, label set, template, and model options,
//! and turns one input text into one [`ClassificationRecord`]. Failures are
//! captured per item: a bad text, a network error, or a malformed reply
//! yields a record with the `error` field set, never a crashed batch.

use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use crate::parse::parse_reply;
use crate::prompt::{PromptTemplate, SYSTEM_PROMPT};
use crate::providers::CompletionProvider;
use crate::telemetry;
use crate::types::{ClassificationRecord, CompletionOptions, LabelSet};
use crate::{FlokkrError, Result};

/// Default model when none is configured.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// LLM-backed text classifier.
///
/// Construct via [`Classifier::builder()`]:
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use flokkr::{Classifier, OpenAiClient};
///
/// # fn main() -> flokkr::Result<()> {
/// let classifier = Classifier::builder()
///     .provider(Arc::new(OpenAiClient::new("sk-your-key")))
///     .model("gpt-4o-mini")
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct Classifier {
    provider: Arc<dyn CompletionProvider>,
    labels: LabelSet,
    template: PromptTemplate,
    options: CompletionOptions,
}

impl Classifier {
    /// Start building a classifier.
    pub fn builder() -> ClassifierBuilder {
        ClassifierBuilder::default()
    }

    /// The configured label set.
    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    /// The configured model.
    pub fn model(&self) -> &str {
        &self.options.model
    }

    /// Classify a single text.
    ///
    /// Empty or whitespace-only input short-circuits to an error record
    /// without calling the provider. Provider and parse failures are
    /// captured into the record's `error` field.
    pub async fn classify(&self, text: &str) -> ClassificationRecord {
        if text.trim().is_empty() {
            return ClassificationRecord::failed(text, self.labels.fallback(), "empty text provided");
        }

        let start = Instant::now();
        let result = self.classify_inner(text).await;
        let status = if result.is_ok() { "ok" } else { "error" };

        metrics::counter!(telemetry::CLASSIFICATIONS_TOTAL,
            "provider" => self.provider.name().to_owned(),
            "status" => status,
        )
        .increment(1);
        metrics::histogram!(telemetry::CLASSIFICATION_DURATION_SECONDS,
            "provider" => self.provider.name().to_owned(),
        )
        .record(start.elapsed().as_secs_f64());

        match result {
            Ok(record) => record,
            Err(e) => {
                debug!(error = %e, "classification failed");
                ClassificationRecord::failed(text, self.labels.fallback(), e.to_string())
            }
        }
    }

    async fn classify_inner(&self, text: &str) -> Result<ClassificationRecord> {
        let prompt = self.template.render(&self.labels, text);
        let completion = self
            .provider
            .complete(SYSTEM_PROMPT, &prompt, &self.options)
            .await?;

        if let Some(usage) = &completion.usage {
            metrics::counter!(telemetry::TOKENS_TOTAL,
                "provider" => self.provider.name().to_owned(),
                "direction" => "prompt",
            )
            .increment(u64::from(usage.prompt_tokens));
            metrics::counter!(telemetry::TOKENS_TOTAL,
                "provider" => self.provider.name().to_owned(),
                "direction" => "completion",
            )
            .increment(u64::from(usage.completion_tokens));
        }

        let reply = parse_reply(&completion.content, &self.labels)?;
        Ok(ClassificationRecord::ok(
            text,
            reply.label,
            reply.confidence,
            reply.rationale,
        ))
    }

    /// Classify multiple texts sequentially, preserving input order.
    pub async fn classify_batch(&self, texts: &[String]) -> Vec<ClassificationRecord> {
        let mut results = Vec::with_capacity(texts.len());
        for text in texts {
            results.push(self.classify(text).await);
        }
        results
    }
}

/// Builder for [`Classifier`].
#[derive(Default)]
pub struct ClassifierBuilder {
    provider: Option<Arc<dyn CompletionProvider>>,
    labels: Option<LabelSet>,
    template: Option<PromptTemplate>,
    model: Option<String>,
}

impl ClassifierBuilder {
    /// Set the completion provider (required).
    pub fn provider(mut self, provider: Arc<dyn CompletionProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Set the label set (default: the built-in four-label set).
    pub fn labels(mut self, labels: LabelSet) -> Self {
        self.labels = Some(labels);
        self
    }

    /// Set the prompt template (default: the built-in template).
    pub fn template(mut self, template: PromptTemplate) -> Self {
        self.template = Some(template);
        self
    }

    /// Set the model (default: [`DEFAULT_MODEL`]).
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Apply a loaded [`ClassifierConfig`](crate::config::ClassifierConfig).
    ///
    /// Explicit `labels()`/`template()` calls after this override the
    /// config's values.
    pub fn config(mut self, config: &crate::config::ClassifierConfig) -> Result<Self> {
        if config.labels.is_some() {
            self.labels = Some(config.label_set()?);
        }
        if config.prompt_template.is_some() {
            self.template = Some(config.template()?);
        }
        Ok(self)
    }

    /// Build the classifier.
    pub fn build(self) -> Result<Classifier> {
        let provider = self.provider.ok_or_else(|| {
            FlokkrError::Configuration("no completion provider configured".to_string())
        })?;
        let model = self.model.unwrap_or_else(|| DEFAULT_MODEL.to_string());
        Ok(Classifier {
            provider,
            labels: self.labels.unwrap_or_default(),
            template: self.template.unwrap_or_default(),
            options: CompletionOptions::new(model),
        })
    }
}
