//! Scripted mock implementation of the text generation port.
//!
//! Used by unit and integration tests to exercise retry bounds and session
//! flows without a network. Responses play back in FIFO order; when the
//! script runs out, the last response repeats.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::TextGenerator;

/// One scripted gateway response.
#[derive(Debug, Clone)]
pub struct MockResponse {
    text: String,
    fail: bool,
}

impl MockResponse {
    /// A successful generation returning `text`.
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fail: false,
        }
    }

    /// A service failure carrying `message`.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            text: message.into(),
            fail: true,
        }
    }
}

/// Mock gateway playing back a scripted response sequence.
pub struct MockGenerator {
    script: Mutex<VecDeque<MockResponse>>,
    last: Mutex<Option<MockResponse>>,
    prompts: Mutex<Vec<String>>,
}

impl MockGenerator {
    /// Creates a mock with a response script, played in order.
    pub fn new(responses: Vec<MockResponse>) -> Self {
        Self {
            script: Mutex::new(responses.into()),
            last: Mutex::new(None),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// A mock that always succeeds with the same text.
    pub fn always(text: impl Into<String>) -> Self {
        Self::new(vec![MockResponse::success(text)])
    }

    /// A mock that always fails with the same message.
    pub fn always_failing(message: impl Into<String>) -> Self {
        Self::new(vec![MockResponse::failure(message)])
    }

    /// Number of `generate` calls received so far.
    pub fn call_count(&self) -> usize {
        self.prompts.lock().map(|prompts| prompts.len()).unwrap_or(0)
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|prompts| prompts.clone()).unwrap_or_default()
    }

    fn next_response(&self) -> Option<MockResponse> {
        let mut script = self.script.lock().ok()?;
        let mut last = self.last.lock().ok()?;
        if let Some(response) = script.pop_front() {
            *last = Some(response.clone());
            Some(response)
        } else {
            last.clone()
        }
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str) -> DomainResult<String> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }

        let response = self
            .next_response()
            .ok_or_else(|| DomainError::Service("mock script is empty".to_string()))?;

        if response.fail {
            Err(DomainError::Service(response.text))
        } else {
            Ok(response.text)
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
