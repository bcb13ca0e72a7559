//! Response helpers. Person bodies are returned bare, without an envelope.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Detail {
    pub detail: String,
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

/// 200 with `{"detail": message}`.
pub fn detail(message: &str) -> (StatusCode, Json<Detail>) {
    (
        StatusCode::OK,
        Json(Detail {
            detail: message.to_string(),
        }),
    )
}
