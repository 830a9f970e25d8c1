//! Provider traits for completion backends.
//!
//! The classifier depends on a narrow [`CompletionProvider`] trait rather
//! than a concrete HTTP client. This enables:
//! - Decorator patterns: `RetryingCompletionProvider`
//! - Mock providers in tests, no network required

use async_trait::async_trait;

use crate::Result;
use crate::types::{Completion, CompletionOptions};

/// Provider for single-turn completions with a system + user message pair.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Provider name for logging/debugging.
    fn name(&self) -> &str;

    /// Request a completion for the given system and user messages.
    async fn complete(
        &self,
        system: &str,
        user: &str,
        options: &CompletionOptions,
    ) -> Result<Completion>;
}
