use crate::handlers::extract::RawJson;
use crate::models::{GenerationRequest, GenerationResult};
use crate::services::compose_prompt;
use crate::services::providers::ProviderError;
use crate::startup::AppState;
use axum::{extract::State, Json};
use serde_json::Value;
use service_core::error::AppError;

const MISSING_INPUT: &str = "No input provided to Kindred.";

/// `POST /api/generate`: validate, compose the prompt, make one upstream call.
pub async fn generate(
    State(state): State<AppState>,
    RawJson(body): RawJson,
) -> Result<Json<GenerationResult>, AppError> {
    tracing::info!("New request arrived at /api/generate");
    tracing::debug!(body = %body, "Received body");

    let request = parse_request(&body)?;

    let Some(user_query) = request.query() else {
        tracing::warn!("Rejected request without userQuery");
        return Err(AppError::BadRequest {
            message: MISSING_INPUT.to_string(),
            received: Some(body),
        });
    };

    let Some(provider) = state.text_provider.as_ref() else {
        tracing::error!("CRITICAL: GEMINI_API_KEY is not configured");
        return Err(AppError::ConfigError(anyhow::anyhow!("API key missing")));
    };

    let prompt = compose_prompt(
        user_query,
        request.tone(),
        &state.config.prompt.default_tone,
    );

    match provider.generate(&prompt, &state.config.generation).await {
        Ok(text) => {
            tracing::info!(
                model = %provider.model(),
                text_len = text.len(),
                "Generation succeeded"
            );
            Ok(Json(GenerationResult { text }))
        }
        Err(err) => {
            match &err {
                ProviderError::ApiError { status, body } => {
                    tracing::error!(status = status.as_u16(), body = %body, "Gemini API failed");
                }
                ProviderError::EmptyResult { reason } => {
                    tracing::warn!(reason = ?reason, "Gemini returned no text");
                }
                ProviderError::InvalidResponse(_) | ProviderError::NetworkError(_) => {
                    tracing::error!(error = %err, "Generation request failed");
                }
            }
            Err(err.into())
        }
    }
}

/// Interpret the body as a [`GenerationRequest`]. Anything other than a JSON
/// object carries no fields and is treated as an empty request; fields of the
/// wrong type are an unexpected error.
fn parse_request(body: &Value) -> Result<GenerationRequest, AppError> {
    if !body.is_object() {
        return Ok(GenerationRequest::default());
    }

    serde_json::from_value(body.clone()).map_err(|e| {
        tracing::error!(error = %e, "Malformed generation request");
        AppError::InternalError(anyhow::Error::new(e))
    })
}
