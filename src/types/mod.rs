//! Core types for classification requests and results.

mod label;
mod options;
mod record;

pub use label::LabelSet;
pub use options::{Completion, CompletionOptions, Usage};
pub use record::ClassificationRecord;
