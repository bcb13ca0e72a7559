//! JSON body extractor whose rejections use the crate's error envelope.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Like [`axum::Json`], but the body must be a JSON object and every decode
/// failure (bad syntax, missing field, wrong type, missing content type)
/// becomes a 422 validation error.
#[derive(Clone, Debug)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(rejection_to_error)?;
        // Structs also deserialize from arrays; only objects are accepted here.
        if !value.is_object() {
            return Err(AppError::Validation("body must be a JSON object".into()));
        }
        let parsed = serde_json::from_value(value).map_err(|e| AppError::Validation(e.to_string()))?;
        Ok(ApiJson(parsed))
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::BadRequest("request body too large".into());
    }
    AppError::Validation(rejection.body_text())
}
