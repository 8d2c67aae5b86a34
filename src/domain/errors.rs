//! Domain errors for the ScanDojo training system.

use thiserror::Error;

/// Domain-level errors that can occur during a training session.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The text-generation service failed (network, auth, quota, empty
    /// response). The message is service-reported and treated as opaque.
    #[error("AI service error: {0}")]
    Service(String),

    /// The service answered, but the text did not satisfy the strict JSON
    /// contract expected by the caller.
    #[error("Malformed AI response: {0}")]
    MalformedResponse(String),

    /// Reading or writing the progress file failed. Load paths recover with
    /// defaults; save paths log and continue.
    #[error("Progress persistence error: {0}")]
    Persistence(String),

    /// The submitted command was empty after trimming.
    #[error("Command cannot be empty")]
    EmptyCommand,

    /// The submitted command does not start with the `nmap` keyword.
    #[error("Please enter a valid nmap command")]
    InvalidCommandFormat,

    /// A hint, submission, or explanation was requested with no mission set.
    #[error("No active mission. Start a new mission first")]
    NoActiveMission,

    /// A hint or submission was requested after the mission was solved.
    #[error("Mission already completed. Start a new mission")]
    MissionAlreadyComplete,
}

/// Result alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::MalformedResponse(err.to_string())
    }
}

impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        DomainError::Persistence(err.to_string())
    }
}

impl DomainError {
    /// True for errors raised locally before any AI call is made; these are
    /// informational to the player and carry no retry semantics.
    pub const fn is_local(&self) -> bool {
        matches!(
            self,
            Self::EmptyCommand
                | Self::InvalidCommandFormat
                | Self::NoActiveMission
                | Self::MissionAlreadyComplete
        )
    }
}
