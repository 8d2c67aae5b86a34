//! Progress persistence port.

use crate::domain::errors::DomainResult;
use crate::domain::models::Progress;
use async_trait::async_trait;

/// Durable storage for the player's progress record.
///
/// The load path is infallible by contract: a missing, unreadable, or
/// malformed store yields the fresh default record, because losing saved
/// progress must never prevent play. Save failures are reported so the
/// caller can log them, but gameplay paths swallow them.
#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// Loads the stored record, falling back to `Progress::default()` on
    /// any failure.
    async fn load(&self) -> Progress;

    /// Persists the record.
    ///
    /// # Errors
    /// Returns `DomainError::Persistence` when the write fails.
    async fn save(&self, progress: &Progress) -> DomainResult<()>;
}
