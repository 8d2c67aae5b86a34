//! Bounded retry policy for the structured AI contracts.
//!
//! The mission generator and command validator retry with different bounds
//! and different backoff schedules depending on whether the failure was a
//! contract violation (malformed JSON) or a service failure. Delays grow
//! linearly with the attempt number. Free-text requests never retry.

use std::time::Duration;

/// Attempt bound plus per-failure-kind backoff bases.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Total attempts including the first (never zero).
    pub max_attempts: u32,
    /// Backoff base after a malformed response; the wait before attempt
    /// `n + 1` is `parse_backoff * n`.
    pub parse_backoff: Duration,
    /// Backoff base after a service failure; same linear schedule.
    pub service_backoff: Duration,
}

impl RetryPolicy {
    /// Mission generation: 1 initial + 2 retries, 3 s / 5 s backoff bases.
    pub const fn generation() -> Self {
        Self {
            max_attempts: 3,
            parse_backoff: Duration::from_secs(3),
            service_backoff: Duration::from_secs(5),
        }
    }

    /// Command validation: 1 initial + 1 immediate retry, no backoff.
    pub const fn validation() -> Self {
        Self {
            max_attempts: 2,
            parse_backoff: Duration::ZERO,
            service_backoff: Duration::ZERO,
        }
    }

    /// Same attempt bounds with zero delays, for tests.
    pub const fn immediate(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            parse_backoff: Duration::ZERO,
            service_backoff: Duration::ZERO,
        }
    }

    /// Wait before the attempt following a malformed response on `attempt`
    /// (1-based).
    pub fn parse_delay(&self, attempt: u32) -> Duration {
        self.parse_backoff * attempt
    }

    /// Wait before the attempt following a service failure on `attempt`
    /// (1-based).
    pub fn service_delay(&self, attempt: u32) -> Duration {
        self.service_backoff * attempt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_policy() {
        let policy = RetryPolicy::generation();
        assert_eq!(policy.max_attempts, 3);
        assert_eq!(policy.parse_delay(1), Duration::from_secs(3));
        assert_eq!(policy.parse_delay(2), Duration::from_secs(6));
        assert_eq!(policy.service_delay(1), Duration::from_secs(5));
        assert_eq!(policy.service_delay(2), Duration::from_secs(10));
    }

    #[test]
    fn test_validation_policy_is_immediate() {
        let policy = RetryPolicy::validation();
        assert_eq!(policy.max_attempts, 2);
        assert_eq!(policy.parse_delay(1), Duration::ZERO);
        assert_eq!(policy.service_delay(1), Duration::ZERO);
    }
}
