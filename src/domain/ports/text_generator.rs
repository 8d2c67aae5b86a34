//! Text generation port for the AI gateway.

use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Single-method gateway to an external generative-text service.
///
/// One prompt in, one completed text out. Implementations report failures
/// (network, auth, quota, empty response) as `DomainError::Service` with the
/// service-supplied message; the content of a failure is opaque to callers.
///
/// No retry logic belongs here. The mission generator and command validator
/// apply their own bounded retry policies, and the free-text requests
/// (hint, answer, explanation) are deliberately single-attempt.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates text for one prompt.
    ///
    /// # Errors
    /// Returns `DomainError::Service` when the remote call fails or the
    /// service returns no usable text.
    async fn generate(&self, prompt: &str) -> DomainResult<String>;

    /// Short adapter name for logs.
    fn name(&self) -> &str;
}
