//! Mock provider implementation for testing.

use super::{GenerationParams, ProviderError, TextProvider};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Canned outcome returned by [`MockTextProvider`].
#[derive(Debug, Clone)]
pub enum MockOutcome {
    Text(String),
    Empty,
    ApiError(StatusCode, Value),
    NetworkError(String),
}

/// Mock text provider that replays a fixed outcome and counts calls.
pub struct MockTextProvider {
    outcome: MockOutcome,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl MockTextProvider {
    pub fn new(outcome: MockOutcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    /// Number of `generate` calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Prompt passed to the most recent `generate` call.
    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(
        &self,
        prompt: &str,
        _params: &GenerationParams,
    ) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_prompt.lock() {
            *last = Some(prompt.to_string());
        }

        match &self.outcome {
            MockOutcome::Text(text) => Ok(text.clone()),
            MockOutcome::Empty => Err(ProviderError::EmptyResult {
                reason: Some("SAFETY".to_string()),
            }),
            MockOutcome::ApiError(status, body) => Err(ProviderError::ApiError {
                status: *status,
                body: body.clone(),
            }),
            MockOutcome::NetworkError(msg) => Err(ProviderError::NetworkError(msg.clone())),
        }
    }

    fn model(&self) -> &str {
        "mock"
    }
}
