//! Text generation provider abstraction.
//!
//! The relay talks to its upstream model through [`TextProvider`] so the
//! handler can be exercised against a stub without network access.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use service_core::error::AppError;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The upstream answered with a non-success status. `body` is its JSON
    /// error payload, or the raw text as a JSON string.
    #[error("API error {status}")]
    ApiError { status: StatusCode, body: Value },

    /// The upstream succeeded but returned no usable text, usually because a
    /// safety filter blocked the candidate.
    #[error("No text returned (reason: {reason:?})")]
    EmptyResult { reason: Option<String> },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Network error: {0}")]
    NetworkError(String),
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::ApiError { status, body } => AppError::Upstream {
                status,
                details: body,
            },
            ProviderError::EmptyResult { .. } => AppError::EmptyResult(
                "AI returned no text. This usually happens due to safety filters.".to_string(),
            ),
            ProviderError::InvalidResponse(msg) | ProviderError::NetworkError(msg) => {
                AppError::InternalError(anyhow::anyhow!(msg))
            }
        }
    }
}

/// Harm categories every request carries a safety threshold for.
pub const HARM_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

/// Fixed generation parameters, loaded once from configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
    /// Blocking threshold applied to each of [`HARM_CATEGORIES`].
    pub safety_threshold: String,
}

/// Trait for single-shot text generation providers (e.g., Gemini).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate text for `prompt`. Exactly one upstream attempt, no retries.
    async fn generate(&self, prompt: &str, params: &GenerationParams)
        -> Result<String, ProviderError>;

    /// Model identifier, for logs.
    fn model(&self) -> &str;
}
