//! Routes under `/api`: `GET /api` is the greeting, the rest is person CRUD keyed by id, name or email.

use crate::handlers::{create, delete as delete_handler, greeting, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn person_routes(state: AppState) -> Router {
    Router::new()
        .route("/api", get(greeting).post(create))
        .route(
            "/api/:identifier",
            get(read).put(update).delete(delete_handler),
        )
        .with_state(state)
}
