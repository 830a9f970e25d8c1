use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use flokkr::providers::traits::CompletionProvider;
use flokkr::types::{Completion, CompletionOptions};
use flokkr::{Classifier, ClassifierConfig, FlokkrError, LabelSet, Result};

/// Mock provider returning a fixed reply, counting calls.
struct FixedReplyProvider {
    reply: String,
    calls: AtomicU32,
}

impl FixedReplyProvider {
    fn new(reply: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.into(),
            calls: AtomicU32::new(0),
        })
    }

    fn call_count(&self) -> u32 {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl CompletionProvider for FixedReplyProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn complete(
        &self,
        _system: &str,
        _user: &str,
        _options: &CompletionOptions,
    ) -> Result<Completion> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Ok(Completion {
            content: self.reply.clone(),
            model: Some("test".into()),
            usage: None,
        })
    }
}

/// Mock provider that always fails.
struct FailingProvider;

#[async_trait]
impl CompletionProvider for FailingProvider {
    fn name(&self) -> &str {
        "mock-fail"
    }

    async fn complete(
        &self,
        _system: &str,
        _user: &str,
        _options: &CompletionOptions,
    ) -> Result<Completion> {
        Err(FlokkrError::Http("connection refused".into()))
    }
}

fn classifier_with(provider: Arc<dyn CompletionProvider>) -> Classifier {
    Classifier::builder()
        .provider(provider)
        .model("test-model")
        .build()
        .unwrap()
}

#[tokio::test]
async fn classifies_valid_reply() {
    let provider = FixedReplyProvider::new(
        r#"{"label": "Inquiry", "confidence": 0.95, "rationale": "asks a question"}"#,
    );
    let classifier = classifier_with(provider.clone());

    let record = classifier.classify("Where is my order?").await;

    assert!(record.is_ok());
    assert_eq!(record.text, "Where is my order?");
    assert_eq!(record.label, "Inquiry");
    assert_eq!(record.confidence, Some(0.95));
    assert_eq!(record.rationale.as_deref(), Some("asks a question"));
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn handles_fenced_reply() {
    let provider =
        FixedReplyProvider::new("```json\n{\"label\": \"Complaint\", \"confidence\": 0.8}\n```");
    let classifier = classifier_with(provider);

    let record = classifier.classify("This is broken").await;
    assert_eq!(record.label, "Complaint");
}

#[tokio::test]
async fn normalises_label_casing() {
    let provider = FixedReplyProvider::new(r#"{"label": "feedback"}"#);
    let classifier = classifier_with(provider);

    let record = classifier.classify("nice work").await;
    assert_eq!(record.label, "Feedback");
}

#[tokio::test]
async fn invalid_label_becomes_error_record() {
    let provider = FixedReplyProvider::new(r#"{"label": "Praise"}"#);
    let classifier = classifier_with(provider);

    let record = classifier.classify("great stuff").await;
    assert!(!record.is_ok());
    assert_eq!(record.label, "Other");
    assert!(record.error.as_deref().unwrap().contains("Praise"));
}

#[tokio::test]
async fn malformed_reply_becomes_error_record() {
    let provider = FixedReplyProvider::new("the label is Inquiry");
    let classifier = classifier_with(provider);

    let record = classifier.classify("hello").await;
    assert!(!record.is_ok());
    assert_eq!(record.label, "Other");
}

#[tokio::test]
async fn empty_text_short_circuits_without_provider_call() {
    let provider = FixedReplyProvider::new(r#"{"label": "Other"}"#);
    let classifier = classifier_with(provider.clone());

    let record = classifier.classify("   ").await;

    assert!(!record.is_ok());
    assert_eq!(record.error.as_deref(), Some("empty text provided"));
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn provider_failure_becomes_error_record() {
    let classifier = classifier_with(Arc::new(FailingProvider));

    let record = classifier.classify("hello").await;
    assert!(!record.is_ok());
    assert_eq!(record.label, "Other");
    assert!(record.error.as_deref().unwrap().contains("connection refused"));
}

#[tokio::test]
async fn batch_preserves_order_and_captures_per_item_errors() {
    let provider = FixedReplyProvider::new(r#"{"label": "Inquiry"}"#);
    let classifier = classifier_with(provider);

    let texts = vec!["first".to_string(), "  ".to_string(), "third".to_string()];
    let records = classifier.classify_batch(&texts).await;

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].text, "first");
    assert!(records[0].is_ok());
    assert!(!records[1].is_ok());
    assert_eq!(records[2].text, "third");
    assert!(records[2].is_ok());
}

#[tokio::test]
async fn custom_labels_change_validation_and_fallback() {
    let provider = FixedReplyProvider::new(r#"{"label": "spam"}"#);
    let classifier = Classifier::builder()
        .provider(provider)
        .labels(LabelSet::new(vec!["spam".into(), "ham".into()]).unwrap())
        .build()
        .unwrap();

    let record = classifier.classify("buy now!!!").await;
    assert_eq!(record.label, "spam");
    // Fallback is the last label of the custom set.
    let empty = classifier.classify("").await;
    assert_eq!(empty.label, "ham");
}

#[tokio::test]
async fn builder_applies_config() {
    let json = r#"{
        "labels": ["Bug", "Feature"],
        "prompt_template": "Pick one of {labels} for: {text}"
    }"#;
    let config: ClassifierConfig = serde_json::from_str(json).unwrap();

    let provider = FixedReplyProvider::new(r#"{"label": "bug"}"#);
    let classifier = Classifier::builder()
        .provider(provider)
        .config(&config)
        .unwrap()
        .build()
        .unwrap();

    let record = classifier.classify("it crashes on start").await;
    assert_eq!(record.label, "Bug");
}

#[test]
fn builder_without_provider_fails() {
    let result = Classifier::builder().build();
    assert!(matches!(result, Err(FlokkrError::Configuration(_))));
}
