//! Person operations over a [`PersonStore`].

use crate::error::AppError;
use crate::model::{NewPerson, Person, PersonPatch};
use crate::service::RequestValidator;
use crate::store::{CommitOutcome, PersonStore};

const CONFLICT_MESSAGE: &str = "name or email already exists";

pub struct PersonService;

impl PersonService {
    /// Look up `identifier` as an id, then a name, then an email; first match wins.
    /// An identifier equal to one person's id and another's name resolves by id.
    pub async fn resolve(store: &PersonStore, identifier: &str) -> Result<Option<Person>, AppError> {
        if let Some(p) = store.find_by_id(identifier).await? {
            return Ok(Some(p));
        }
        if let Some(p) = store.find_by_name(identifier).await? {
            return Ok(Some(p));
        }
        store.find_by_email(identifier).await
    }

    async fn resolve_existing(store: &PersonStore, identifier: &str) -> Result<Person, AppError> {
        Self::resolve(store, identifier)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("person '{}'", identifier)))
    }

    /// Validate, stage and commit a new person. Returns the stored record with its generated id.
    pub async fn create(store: &PersonStore, body: NewPerson) -> Result<Person, AppError> {
        RequestValidator::validate(&body)?;
        let mut uow = store.begin();
        let person = uow.create(body);
        match uow.commit().await? {
            CommitOutcome::Committed => {
                tracing::info!(id = %person.id, "person created");
                Ok(person)
            }
            CommitOutcome::Conflict => Err(AppError::Conflict(CONFLICT_MESSAGE.into())),
            // An insert never reports a missing row.
            CommitOutcome::NotFound => Err(AppError::Db(sqlx::Error::RowNotFound)),
        }
    }

    pub async fn read(store: &PersonStore, identifier: &str) -> Result<Person, AppError> {
        Self::resolve_existing(store, identifier).await
    }

    /// Apply `patch` to the resolved person. On conflict the stored row is untouched
    /// and the patched copy is dropped.
    pub async fn update(
        store: &PersonStore,
        identifier: &str,
        patch: PersonPatch,
    ) -> Result<Person, AppError> {
        RequestValidator::validate_partial(&patch)?;
        let current = Self::resolve_existing(store, identifier).await?;
        if patch.is_empty() {
            return Ok(current);
        }
        let mut updated = current.clone();
        patch.apply_to(&mut updated);

        let mut uow = store.begin();
        uow.update(&updated);
        match uow.commit().await? {
            CommitOutcome::Committed => {
                tracing::info!(id = %updated.id, "person updated");
                Ok(updated)
            }
            CommitOutcome::Conflict => Err(AppError::Conflict(CONFLICT_MESSAGE.into())),
            CommitOutcome::NotFound => Err(AppError::NotFound(format!("person '{}'", identifier))),
        }
    }

    pub async fn delete(store: &PersonStore, identifier: &str) -> Result<(), AppError> {
        let person = Self::resolve_existing(store, identifier).await?;
        let mut uow = store.begin();
        uow.delete(&person);
        match uow.commit().await? {
            CommitOutcome::Committed => {
                tracing::info!(id = %person.id, "person deleted");
                Ok(())
            }
            CommitOutcome::NotFound => Err(AppError::NotFound(format!("person '{}'", identifier))),
            CommitOutcome::Conflict => Err(AppError::Conflict(CONFLICT_MESSAGE.into())),
        }
    }
}
