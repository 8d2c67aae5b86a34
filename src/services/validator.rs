//! Command validation service.
//!
//! Builds the proctor prompt embedding the active mission and the literal
//! candidate command, calls the gateway, and parses the strict JSON verdict.
//! One immediate retry on either failure kind; the consequences of a verdict
//! (XP, completion, persistence) belong to the session, not here.

use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Mission, Verdict};
use crate::domain::ports::TextGenerator;
use crate::services::prompts;
use crate::services::response::parse_contract;
use crate::services::retry::RetryPolicy;

/// Judges submitted commands through the AI gateway.
pub struct CommandValidator {
    gateway: Arc<dyn TextGenerator>,
    retry: RetryPolicy,
}

impl CommandValidator {
    /// Creates a validator with the production retry policy.
    pub fn new(gateway: Arc<dyn TextGenerator>) -> Self {
        Self::with_retry(gateway, RetryPolicy::validation())
    }

    /// Creates a validator with a custom retry policy.
    pub const fn with_retry(gateway: Arc<dyn TextGenerator>, retry: RetryPolicy) -> Self {
        Self { gateway, retry }
    }

    /// Validates one candidate command against the mission.
    ///
    /// # Errors
    /// Propagates the final `MalformedResponse` or `Service` error once the
    /// retry bound is exhausted.
    #[instrument(skip(self, mission), fields(command))]
    pub async fn validate(&self, mission: &Mission, command: &str) -> DomainResult<Verdict> {
        let prompt = prompts::validation_prompt(mission, command);
        let mut last_error = DomainError::Service("validation not attempted".to_string());

        for attempt in 1..=self.retry.max_attempts {
            match self.attempt(&prompt).await {
                Ok(verdict) => {
                    info!(attempt, correct = verdict.correct, "command judged");
                    return Ok(verdict);
                }
                Err(error @ DomainError::MalformedResponse(_)) => {
                    warn!(attempt, %error, "verdict failed the contract");
                    if attempt < self.retry.max_attempts {
                        tokio::time::sleep(self.retry.parse_delay(attempt)).await;
                    }
                    last_error = error;
                }
                Err(error) => {
                    warn!(attempt, %error, "validation call failed");
                    if attempt < self.retry.max_attempts {
                        tokio::time::sleep(self.retry.service_delay(attempt)).await;
                    }
                    last_error = error;
                }
            }
        }

        Err(last_error)
    }

    async fn attempt(&self, prompt: &str) -> DomainResult<Verdict> {
        let text = self.gateway.generate(prompt).await?;
        parse_contract(&text)
    }
}
