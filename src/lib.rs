//! Flokkr - LLM-backed text classification
//!
//! This crate is a thin client over hosted chat-completion APIs: it renders
//! a deterministic classification prompt, calls the API, and parses the
//! JSON-shaped reply into a label/confidence/rationale record. The same
//! pipeline backs a CLI (`flokkr`), a small web UI (`flokkrd`), and batch
//! file processing.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use flokkr::{Classifier, OpenAiClient};
//!
//! #[tokio::main]
//! async fn main() -> flokkr::Result<()> {
//!     let classifier = Classifier::builder()
//!         .provider(Arc::new(OpenAiClient::new("sk-your-key")))
//!         .model("gpt-4o-mini")
//!         .build()?;
//!
//!     let record = classifier.classify("Where is my refund?").await;
//!     println!("{} ({:?})", record.label, record.confidence);
//!     Ok(())
//! }
//! ```

pub mod classifier;
pub mod config;
pub mod error;
pub mod input;
pub mod parse;
pub mod prompt;
pub mod providers;
#[cfg(feature = "server")]
pub mod server;
pub mod telemetry;
pub mod types;

// Re-export main types at crate root
pub use classifier::{Classifier, ClassifierBuilder, DEFAULT_MODEL};
pub use config::ClassifierConfig;
pub use error::{FlokkrError, Result};
pub use prompt::PromptTemplate;
pub use providers::{CompletionProvider, OpenAiClient, RetryConfig, RetryingCompletionProvider};
pub use types::{ClassificationRecord, Completion, CompletionOptions, LabelSet, Usage};
