use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {message}")]
    BadRequest {
        message: String,
        received: Option<Value>,
    },

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),

    /// A downstream service answered with a non-success status.
    #[error("Upstream error: {status}")]
    Upstream { status: StatusCode, details: Value },

    /// A downstream service answered successfully but produced nothing usable.
    #[error("Empty result: {0}")]
    EmptyResult(String),

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Upstream { status, .. } => *status,
            AppError::ConfigError(_) | AppError::EmptyResult(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received: Option<Value>,
}

impl ErrorResponse {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
            message: None,
            received: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            AppError::BadRequest { message, received } => ErrorResponse {
                received,
                ..ErrorResponse::new(message)
            },
            AppError::ConfigError(err) => {
                ErrorResponse::new(format!("Server configuration error - {}", err))
            }
            AppError::Upstream { details, .. } => ErrorResponse {
                details: Some(details),
                ..ErrorResponse::new("AI Service Error")
            },
            AppError::EmptyResult(msg) => ErrorResponse::new(msg),
            AppError::InternalError(err) => ErrorResponse {
                message: Some(err.to_string()),
                ..ErrorResponse::new("Internal server error")
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde_json::json;

    async fn render(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn bad_request_echoes_received_body() {
        let (status, body) = render(AppError::BadRequest {
            message: "No input provided".to_string(),
            received: Some(json!({ "userQuery": "  " })),
        })
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No input provided");
        assert_eq!(body["received"]["userQuery"], "  ");
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn upstream_keeps_status_and_body() {
        let (status, body) = render(AppError::Upstream {
            status: StatusCode::TOO_MANY_REQUESTS,
            details: json!({ "error": "quota exceeded" }),
        })
        .await;

        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            body,
            json!({ "error": "AI Service Error", "details": { "error": "quota exceeded" } })
        );
    }

    #[tokio::test]
    async fn config_error_has_no_message_field() {
        let (status, body) =
            render(AppError::ConfigError(anyhow::anyhow!("API key missing"))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({ "error": "Server configuration error - API key missing" })
        );
    }

    #[tokio::test]
    async fn internal_error_carries_message() {
        let (status, body) = render(AppError::InternalError(anyhow::anyhow!("boom"))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
        assert_eq!(body["message"], "boom");
    }
}
