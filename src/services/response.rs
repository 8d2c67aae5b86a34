//! Structured-response handling for the strict JSON contracts.
//!
//! The prompts instruct the model to answer with bare JSON, but models wrap
//! output in markdown fences anyway; the fence is stripped before parsing.

use serde::de::DeserializeOwned;

use crate::domain::errors::{DomainError, DomainResult};

/// Removes a surrounding markdown code fence, if present.
///
/// Handles ````` ```json ````` and plain ````` ``` ````` openings and a
/// trailing ````` ``` `````, tolerating whitespace around the fence. Text
/// without a fence is returned trimmed and otherwise untouched.
pub fn strip_code_fences(text: &str) -> &str {
    let mut stripped = text.trim();
    if let Some(rest) = stripped.strip_prefix("```") {
        // Drop an info string such as "json" up to the first newline.
        stripped = rest.find('\n').map_or("", |pos| &rest[pos + 1..]);
        if let Some(rest) = stripped.trim_end().strip_suffix("```") {
            stripped = rest;
        }
    }
    stripped.trim()
}

/// Strips fencing and parses the text into a contract type.
///
/// # Errors
/// Returns `DomainError::MalformedResponse` when the text is not valid JSON
/// for `T`; missing or mistyped fields fail the parse, unknown extras do not.
pub fn parse_contract<T: DeserializeOwned>(text: &str) -> DomainResult<T> {
    let body = strip_code_fences(text);
    serde_json::from_str(body)
        .map_err(|e| DomainError::MalformedResponse(format!("{e} in: {}", truncate(body, 120))))
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{cut}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Verdict;

    #[test]
    fn test_strip_plain_text_unchanged() {
        assert_eq!(strip_code_fences(r#"{"a":1}"#), r#"{"a":1}"#);
        assert_eq!(strip_code_fences("  hello  "), "hello");
    }

    #[test]
    fn test_strip_json_fence() {
        let fenced = "```json\n{\"correct\": true}\n```";
        assert_eq!(strip_code_fences(fenced), r#"{"correct": true}"#);
    }

    #[test]
    fn test_strip_anonymous_fence() {
        let fenced = "```\n{\"correct\": false}\n```";
        assert_eq!(strip_code_fences(fenced), r#"{"correct": false}"#);
    }

    #[test]
    fn test_strip_fence_with_surrounding_whitespace() {
        let fenced = "\n\n```json\n{\"x\": 1}\n```\n\n";
        assert_eq!(strip_code_fences(fenced), r#"{"x": 1}"#);
    }

    #[test]
    fn test_parse_contract_through_fence() {
        let fenced = "```json\n{\"correct\": true, \"feedback\": \"ok\", \"simulated_output\": \"out\"}\n```";
        let verdict: Verdict = parse_contract(fenced).expect("fenced contract parses");
        assert!(verdict.correct);
    }

    #[test]
    fn test_parse_contract_rejects_prose() {
        let err = parse_contract::<Verdict>("Sure! Here is your scan result.").unwrap_err();
        assert!(matches!(err, DomainError::MalformedResponse(_)));
    }

    #[test]
    fn test_parse_error_message_is_truncated() {
        let long = format!("not json {}", "x".repeat(500));
        let err = parse_contract::<Verdict>(&long).unwrap_err();
        let message = err.to_string();
        assert!(message.len() < 300);
        assert!(message.contains("..."));
    }
}
