//! Person API: CRUD over a single SQLite-backed person table, addressed by id, name or email.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{Mode, Settings};
pub use error::{AppError, ConfigError};
pub use model::{NewPerson, Person, PersonPatch};
pub use routes::{app, common_routes_with_ready, person_routes};
pub use service::PersonService;
pub use state::AppState;
pub use store::{CommitOutcome, PersonStore, UnitOfWork};
