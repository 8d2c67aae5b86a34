//! Integration tests for the Gemini gateway adapter.
//!
//! These tests verify the HTTP contract against a mock server:
//! - Request shape (path, headers, JSON body)
//! - Text extraction from well-formed responses
//! - Error surfacing for API error statuses and malformed bodies
//! - Validator recovery through the adapter (zero-backoff retry policy)

use mockito::{Matcher, Server};
use std::sync::Arc;

use scandojo::adapters::GeminiClient;
use scandojo::domain::errors::DomainError;
use scandojo::domain::models::{Difficulty, GatewayConfig, Mission};
use scandojo::domain::ports::TextGenerator;
use scandojo::services::CommandValidator;

fn client_for(server: &Server) -> GeminiClient {
    let config = GatewayConfig {
        api_key: Some("test-key".to_string()),
        base_url: server.url(),
        model: "gemini-2.5-flash".to_string(),
        timeout_secs: 5,
    };
    GeminiClient::new(config).expect("client should build")
}

fn response_body(text: &str) -> String {
    serde_json::json!({
        "candidates": [{
            "content": {
                "parts": [{"text": text}],
                "role": "model"
            },
            "finishReason": "STOP"
        }]
    })
    .to_string()
}

#[tokio::test]
async fn test_generate_sends_expected_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
        .match_header("x-goog-api-key", "test-key")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "contents": [{"parts": [{"text": "describe a ping sweep"}]}]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(response_body("A ping sweep finds live hosts."))
        .create_async()
        .await;

    let client = client_for(&server);
    let text = client
        .generate("describe a ping sweep")
        .await
        .expect("generate should succeed");

    assert_eq!(text, "A ping sweep finds live hosts.");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_generate_concatenates_multiple_parts() {
    let mut server = Server::new_async().await;
    let body = serde_json::json!({
        "candidates": [{
            "content": {"parts": [{"text": "nmap -sn "}, {"text": "10.0.0.0/24"}]}
        }]
    })
    .to_string();
    let _mock = server
        .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
        .with_status(200)
        .with_body(body)
        .create_async()
        .await;

    let client = client_for(&server);
    let text = client.generate("answer").await.expect("generate should succeed");
    assert_eq!(text, "nmap -sn 10.0.0.0/24");
}

#[tokio::test]
async fn test_custom_model_routes_to_its_endpoint() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/gemini-2.0-pro:generateContent")
        .with_status(200)
        .with_body(response_body("ok"))
        .create_async()
        .await;

    let config = GatewayConfig {
        api_key: Some("test-key".to_string()),
        base_url: server.url(),
        model: "gemini-2.0-pro".to_string(),
        timeout_secs: 5,
    };
    let client = GeminiClient::new(config).expect("client should build");
    client.generate("hello").await.expect("generate should succeed");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_api_error_surfaces_status_and_message() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
        .with_status(400)
        .with_body(r#"{"error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let error = client.generate("hello").await.expect_err("should fail");

    match error {
        DomainError::Service(message) => {
            assert!(message.contains("400"), "missing status in: {message}");
            assert!(
                message.contains("API key not valid"),
                "missing service message in: {message}"
            );
        }
        other => panic!("expected a service error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_api_error_with_non_json_body_still_reports_status() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
        .with_status(503)
        .with_body("upstream connect error")
        .create_async()
        .await;

    let client = client_for(&server);
    let error = client.generate("hello").await.expect_err("should fail");

    match error {
        DomainError::Service(message) => {
            assert!(message.contains("503"), "missing status in: {message}");
        }
        other => panic!("expected a service error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_success_body_is_a_service_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
        .with_status(200)
        .with_body("this is not json")
        .create_async()
        .await;

    let client = client_for(&server);
    let error = client.generate("hello").await.expect_err("should fail");
    assert!(matches!(error, DomainError::Service(_)));
}

#[tokio::test]
async fn test_empty_candidates_is_a_service_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
        .with_status(200)
        .with_body(r#"{"candidates": []}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let error = client.generate("hello").await.expect_err("should fail");
    assert!(matches!(error, DomainError::Service(_)));
}

#[tokio::test]
async fn test_missing_api_key_fails_before_any_request() {
    // No env fallback either; the variable is cleared for this test binary.
    std::env::remove_var("GEMINI_API_KEY");

    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
        .expect(0)
        .create_async()
        .await;

    let config = GatewayConfig {
        api_key: None,
        base_url: server.url(),
        model: "gemini-2.5-flash".to_string(),
        timeout_secs: 5,
    };
    let client = GeminiClient::new(config).expect("client should build");
    assert!(!client.has_api_key());

    let error = client.generate("hello").await.expect_err("should fail");
    match error {
        DomainError::Service(message) => {
            assert!(message.contains("GEMINI_API_KEY"), "unexpected: {message}");
        }
        other => panic!("expected a service error, got {other:?}"),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn test_validator_recovers_after_server_error() {
    // The validation retry policy has no backoff, so this test runs without
    // sleeping: one 500, then a well-formed verdict.
    let mut server = Server::new_async().await;
    let mock_error = server
        .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
        .with_status(500)
        .with_body(r#"{"error": {"message": "Internal error"}}"#)
        .expect(1)
        .create_async()
        .await;
    let verdict_json = r#"{"correct": true, "feedback": "Correct!", "simulated_output": "Starting Nmap 7.95\nHost is up."}"#;
    let mock_success = server
        .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
        .with_status(200)
        .with_body(response_body(verdict_json))
        .expect(1)
        .create_async()
        .await;

    let client = Arc::new(client_for(&server));
    let validator = CommandValidator::new(client);
    let mission = Mission {
        title: "Operation Quiet Gate".to_string(),
        description: "Find live hosts without port scanning.".to_string(),
        target_ip: "10.20.0.0/24".to_string(),
        difficulty: Difficulty::Easy,
        topic_category: "Host Discovery".to_string(),
    };

    let verdict = validator
        .validate(&mission, "nmap -sn 10.20.0.0/24")
        .await
        .expect("validator should recover on retry");

    assert!(verdict.correct);
    mock_error.assert_async().await;
    mock_success.assert_async().await;
}
