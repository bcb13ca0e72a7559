//! Person CRUD handlers: create, read, update, delete. The path identifier may be an id, name or email.

use crate::error::AppError;
use crate::extractors::ApiJson;
use crate::model::{NewPerson, PersonPatch};
use crate::response::{created, detail, ok};
use crate::service::PersonService;
use crate::state::AppState;
use axum::extract::{Path, State};

/// POST /api
pub async fn create(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<NewPerson>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let person = PersonService::create(&state.store, body).await?;
    Ok(created(person))
}

/// GET /api/:identifier
pub async fn read(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let person = PersonService::read(&state.store, &identifier).await?;
    Ok(ok(person))
}

/// PUT /api/:identifier — partial update; `id` and unknown keys are ignored.
pub async fn update(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
    ApiJson(patch): ApiJson<PersonPatch>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let person = PersonService::update(&state.store, &identifier, patch).await?;
    Ok(ok(person))
}

/// DELETE /api/:identifier
pub async fn delete(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    PersonService::delete(&state.store, &identifier).await?;
    Ok(detail("Person deleted successfully"))
}
