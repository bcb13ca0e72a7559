//! Shared application state for all routes.

use crate::store::PersonStore;

#[derive(Clone)]
pub struct AppState {
    pub store: PersonStore,
}

impl AppState {
    pub fn new(store: PersonStore) -> AppState {
        AppState { store }
    }
}
