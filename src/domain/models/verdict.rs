//! Verdict domain model.

use serde::{Deserialize, Serialize};

/// The proctor's structured judgment of one submitted command.
///
/// Ephemeral: produced per submission, consumed by the session immediately,
/// never persisted. All fields are required at parse time; unknown extra
/// keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// Whether the command satisfies the mission.
    pub correct: bool,
    /// Short explanation of the result, shown to the player.
    pub feedback: String,
    /// Fabricated multi-line nmap terminal output consistent with the
    /// command, rendered verbatim.
    pub simulated_output: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_parses_exact_contract() {
        let json = r#"{
            "correct": true,
            "feedback": "Correct! -sV enables version detection.",
            "simulated_output": "Starting Nmap 7.95\nHost is up (0.0021s latency).\nPORT   STATE SERVICE VERSION\n22/tcp open  ssh     OpenSSH 9.6"
        }"#;
        let verdict: Verdict = serde_json::from_str(json).expect("contract should parse");
        assert!(verdict.correct);
        assert!(verdict.simulated_output.contains("PORT   STATE SERVICE"));
    }

    #[test]
    fn test_verdict_rejects_missing_field() {
        let json = r#"{"correct": false, "feedback": "Missing -6 flag."}"#;
        assert!(serde_json::from_str::<Verdict>(json).is_err());
    }

    #[test]
    fn test_verdict_rejects_mistyped_correct() {
        let json = r#"{"correct": "yes", "feedback": "f", "simulated_output": "s"}"#;
        assert!(serde_json::from_str::<Verdict>(json).is_err());
    }
}
