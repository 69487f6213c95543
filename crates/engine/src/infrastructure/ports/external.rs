//! External service port traits.

use async_trait::async_trait;

use super::error::LlmError;

/// The AI narrator the finished prompt is handed to.
///
/// Retry, rate limiting and circuit breaking are the provider's own
/// concern; the engine only passes a rendered prompt string and expects a
/// plain string back.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NarratorPort: Send + Sync {
    /// Generate narration for the given prompt.
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;

    /// Whether the provider currently expects to be able to answer.
    async fn healthy(&self) -> bool;
}
