//! Gemini API gateway implementation.
//!
//! Makes direct HTTP calls to the Google Generative Language
//! `generateContent` endpoint. One prompt per request, no streaming.

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::GatewayConfig;
use crate::domain::ports::TextGenerator;

/// A prompt or response part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    /// Text payload of the part.
    pub text: String,
}

/// Content container holding ordered parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// The parts making up this content, concatenated in order.
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// Request body for `generateContent`.
#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    /// Conversation contents; a single user turn for this application.
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Builds a single-turn request from one prompt.
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

/// One generated candidate.
#[derive(Debug, Deserialize)]
pub struct Candidate {
    /// Generated content; can be absent when generation was blocked.
    #[serde(default)]
    pub content: Option<Content>,
}

/// Response body for `generateContent`.
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    /// Ranked candidates; the first is used.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// Error payload returned by the service on non-success statuses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

/// Gemini-backed implementation of the text generation port.
pub struct GeminiClient {
    config: GatewayConfig,
    client: Client,
}

impl GeminiClient {
    /// Creates a new client from gateway configuration.
    ///
    /// # Errors
    /// Returns `DomainError::Service` if the HTTP client cannot be built.
    pub fn new(config: GatewayConfig) -> DomainResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DomainError::Service(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    /// Creates a client with default configuration.
    pub fn with_defaults() -> DomainResult<Self> {
        Self::new(GatewayConfig::default())
    }

    /// Whether an API key is resolvable from config or environment.
    pub fn has_api_key(&self) -> bool {
        self.config.resolve_api_key().is_some()
    }

    /// Full URL of the `generateContent` endpoint for the configured model.
    fn endpoint_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Extracts the generated text from a response body.
    ///
    /// The text is the in-order concatenation of the first candidate's
    /// parts; an empty result is a service failure, not valid output.
    fn extract_text(response: GenerateContentResponse) -> DomainResult<String> {
        let text = response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(DomainError::Service(
                "Service returned no text candidates".to_string(),
            ));
        }
        Ok(text)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> DomainResult<String> {
        let api_key = self.config.resolve_api_key().ok_or_else(|| {
            DomainError::Service("GEMINI_API_KEY not set (config gateway.api_key or environment)".to_string())
        })?;

        debug!(model = %self.config.model, prompt_len = prompt.len(), "sending generate request");

        let response = self
            .client
            .post(self.endpoint_url())
            .header(header::CONTENT_TYPE, "application/json")
            .header("x-goog-api-key", &api_key)
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(|e| DomainError::Service(format!("Request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map_or(body, |parsed| parsed.error.message);
            return Err(DomainError::Service(format!("API error {status}: {message}")));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Service(format!("Failed to read response body: {e}")))?;

        let text = Self::extract_text(body)?;
        debug!(response_len = text.len(), "generate request completed");
        Ok(text)
    }

    fn name(&self) -> &str {
        "gemini"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_with(base_url: &str, model: &str) -> GeminiClient {
        let config = GatewayConfig::default()
            .with_api_key("test-key")
            .with_model(model);
        let config = GatewayConfig {
            base_url: base_url.to_string(),
            ..config
        };
        GeminiClient::new(config).expect("client should build")
    }

    #[test]
    fn test_endpoint_url() {
        let client = client_with("https://generativelanguage.googleapis.com", "gemini-2.5-flash");
        assert_eq!(
            client.endpoint_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_endpoint_url_trims_trailing_slash() {
        let client = client_with("http://localhost:8080/", "gemini-2.5-flash");
        assert_eq!(
            client.endpoint_url(),
            "http://localhost:8080/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_request_shape() {
        let request = GenerateContentRequest::from_prompt("scan the subnet");
        let json = serde_json::to_value(&request).expect("serializes");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "scan the subnet");
    }

    #[test]
    fn test_extract_text_concatenates_parts() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"Hello "},{"text":"world"}]}}]}"#,
        )
        .expect("parses");
        let text = GeminiClient::extract_text(response).expect("has text");
        assert_eq!(text, "Hello world");
    }

    #[test]
    fn test_extract_text_rejects_empty_candidates() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[]}"#).expect("parses");
        assert!(matches!(
            GeminiClient::extract_text(response),
            Err(DomainError::Service(_))
        ));
    }

    #[test]
    fn test_extract_text_rejects_blocked_candidate() {
        // A safety-blocked candidate carries no content.
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{}]}"#).expect("parses");
        assert!(GeminiClient::extract_text(response).is_err());
    }
}
