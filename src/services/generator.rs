//! Mission generation service.
//!
//! Builds the generation prompt for a topic/difficulty pair, calls the
//! gateway, and parses the strict JSON contract into a `Mission`, retrying
//! inside a bounded loop. Exhausted retries surface the final error; the
//! player re-triggers manually.

use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Difficulty, Mission};
use crate::domain::ports::TextGenerator;
use crate::services::prompts;
use crate::services::response::parse_contract;
use crate::services::retry::RetryPolicy;

/// Generates training missions through the AI gateway.
pub struct MissionGenerator {
    gateway: Arc<dyn TextGenerator>,
    retry: RetryPolicy,
}

impl MissionGenerator {
    /// Creates a generator with the production retry policy.
    pub fn new(gateway: Arc<dyn TextGenerator>) -> Self {
        Self::with_retry(gateway, RetryPolicy::generation())
    }

    /// Creates a generator with a custom retry policy.
    pub const fn with_retry(gateway: Arc<dyn TextGenerator>, retry: RetryPolicy) -> Self {
        Self { gateway, retry }
    }

    /// Generates one mission for the given topic and difficulty.
    ///
    /// Retries the whole call on malformed responses and on service
    /// failures, each up to the policy bound with linear backoff. Does not
    /// touch progress or session state.
    ///
    /// # Errors
    /// Propagates the final `MalformedResponse` or `Service` error once all
    /// attempts are exhausted.
    #[instrument(skip(self), fields(topic, difficulty = %difficulty))]
    pub async fn generate(&self, topic: &str, difficulty: Difficulty) -> DomainResult<Mission> {
        let prompt = prompts::mission_prompt(topic, difficulty);
        let mut last_error = DomainError::Service("mission generation not attempted".to_string());

        for attempt in 1..=self.retry.max_attempts {
            match self.attempt(&prompt).await {
                Ok(mission) => {
                    info!(attempt, title = %mission.title, "mission generated");
                    return Ok(mission);
                }
                Err(error @ DomainError::MalformedResponse(_)) => {
                    warn!(attempt, %error, "mission response failed the contract");
                    if attempt < self.retry.max_attempts {
                        tokio::time::sleep(self.retry.parse_delay(attempt)).await;
                    }
                    last_error = error;
                }
                Err(error) => {
                    warn!(attempt, %error, "mission generation call failed");
                    if attempt < self.retry.max_attempts {
                        tokio::time::sleep(self.retry.service_delay(attempt)).await;
                    }
                    last_error = error;
                }
            }
        }

        Err(last_error)
    }

    async fn attempt(&self, prompt: &str) -> DomainResult<Mission> {
        let text = self.gateway.generate(prompt).await?;
        parse_contract(&text)
    }
}
