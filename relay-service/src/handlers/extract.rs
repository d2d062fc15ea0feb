use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde_json::Value;
use service_core::error::AppError;

/// JSON body extractor that keeps the body untyped so it can be echoed back,
/// and reports unreadable bodies through [`AppError`].
pub struct RawJson(pub Value);

#[axum::async_trait]
impl<S> FromRequest<S> for RawJson
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::error!(
                    status = rejection.status().as_u16(),
                    "Failed to read request body: {}",
                    rejection.body_text()
                );
                AppError::InternalError(anyhow::anyhow!(rejection.body_text()))
            })?;

        Ok(RawJson(value))
    }
}
