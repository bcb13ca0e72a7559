//! Person table persistence: pool bootstrap, schema creation, alternate-key lookups,
//! and the unit of work that applies staged writes in a single transaction.

use crate::config::Settings;
use crate::error::AppError;
use crate::model::{NewPerson, Person};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::SqliteConnection;
use std::str::FromStr;
use std::time::Duration;

const PERSON_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS person (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL UNIQUE,
        email TEXT NOT NULL UNIQUE
    )
"#;

const SELECT_PERSON: &str = "SELECT id, name, email FROM person";

/// Handle to the person table. Cheap to clone; all clones share one pool.
#[derive(Clone, Debug)]
pub struct PersonStore {
    pool: SqlitePool,
}

/// Result of applying a unit of work. Storage faults are returned as `Err` instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommitOutcome {
    Committed,
    /// A write collided with an existing `name`, `email` or `id`. Nothing was applied.
    Conflict,
    /// A staged update or delete addressed a row that no longer exists. Nothing was applied.
    NotFound,
}

#[derive(Debug)]
enum Staged {
    Insert(Person),
    Update(Person),
    Delete(String),
}

impl PersonStore {
    /// Open the pool described by `settings`, creating the database file if missing.
    /// Call [`PersonStore::init`] (or [`PersonStore::reset`]) before serving requests.
    pub async fn connect(settings: &Settings) -> Result<PersonStore, AppError> {
        let options = SqliteConnectOptions::from_str(&settings.database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(settings.max_connections)
            .connect_with(options)
            .await?;
        Ok(PersonStore { pool })
    }

    /// Single-connection in-memory store with the schema applied.
    pub async fn in_memory() -> Result<PersonStore, AppError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        // Every connection to :memory: is its own database, so keep exactly one alive.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await?;
        let store = PersonStore { pool };
        store.init().await?;
        Ok(store)
    }

    /// Create the person table if it does not exist.
    pub async fn init(&self) -> Result<(), AppError> {
        sqlx::query(PERSON_DDL).execute(&self.pool).await?;
        tracing::info!("person table ready");
        Ok(())
    }

    /// Drop and re-create the person table.
    pub async fn reset(&self) -> Result<(), AppError> {
        sqlx::query("DROP TABLE IF EXISTS person").execute(&self.pool).await?;
        tracing::info!("person table dropped");
        self.init().await
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Person>, AppError> {
        self.find_one("id", id).await
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Person>, AppError> {
        self.find_one("name", name).await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Person>, AppError> {
        self.find_one("email", email).await
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM person")
            .fetch_one(&self.pool)
            .await?;
        Ok(n)
    }

    /// Start an empty unit of work against this store.
    pub fn begin(&self) -> UnitOfWork<'_> {
        UnitOfWork {
            store: self,
            staged: Vec::new(),
        }
    }

    // `column` is always one of the fixed literals above, never caller input.
    async fn find_one(&self, column: &'static str, value: &str) -> Result<Option<Person>, AppError> {
        let sql = format!("{} WHERE {} = ?", SELECT_PERSON, column);
        tracing::debug!(sql = %sql, value_len = value.len(), "query");
        let row = sqlx::query_as::<_, Person>(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}

/// Staged writes against a [`PersonStore`]. Nothing reaches the database until
/// [`UnitOfWork::commit`], which applies everything or nothing.
#[derive(Debug)]
pub struct UnitOfWork<'s> {
    store: &'s PersonStore,
    staged: Vec<Staged>,
}

impl<'s> UnitOfWork<'s> {
    /// Stage a new person. The id is generated here and is final.
    pub fn create(&mut self, new: NewPerson) -> Person {
        let person = Person {
            id: uuid::Uuid::new_v4().to_string(),
            name: new.name,
            email: new.email,
        };
        self.staged.push(Staged::Insert(person.clone()));
        person
    }

    /// Stage the current `name` and `email` of `person` for the row with its id.
    pub fn update(&mut self, person: &Person) {
        self.staged.push(Staged::Update(person.clone()));
    }

    pub fn delete(&mut self, person: &Person) {
        self.staged.push(Staged::Delete(person.id.clone()));
    }

    /// Apply all staged writes in one transaction. Any conflict, missing row or
    /// fault rolls the whole transaction back.
    pub async fn commit(self) -> Result<CommitOutcome, AppError> {
        if self.staged.is_empty() {
            return Ok(CommitOutcome::Committed);
        }
        let mut tx = self.store.pool.begin().await?;
        for op in &self.staged {
            let result = apply(&mut tx, op).await;
            let outcome = match result {
                Ok(true) => continue,
                Ok(false) => Ok(CommitOutcome::NotFound),
                Err(e) if is_unique_violation(&e) => {
                    tracing::warn!(error = %e, "uniqueness conflict");
                    Ok(CommitOutcome::Conflict)
                }
                Err(e) => Err(e),
            };
            if let Err(rb) = tx.rollback().await {
                tracing::error!(error = %rb, "rollback failed");
            }
            return outcome.map_err(AppError::from);
        }
        match tx.commit().await {
            Ok(()) => {
                tracing::info!(writes = self.staged.len(), "unit of work committed");
                Ok(CommitOutcome::Committed)
            }
            Err(e) if is_unique_violation(&e) => {
                tracing::warn!(error = %e, "uniqueness conflict at commit");
                Ok(CommitOutcome::Conflict)
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Execute one staged write. `Ok(false)` means the target row was missing.
async fn apply(conn: &mut SqliteConnection, op: &Staged) -> Result<bool, sqlx::Error> {
    let affected = match op {
        Staged::Insert(p) => {
            tracing::debug!(id = %p.id, "insert person");
            sqlx::query("INSERT INTO person (id, name, email) VALUES (?, ?, ?)")
                .bind(&p.id)
                .bind(&p.name)
                .bind(&p.email)
                .execute(&mut *conn)
                .await?
                .rows_affected()
        }
        Staged::Update(p) => {
            tracing::debug!(id = %p.id, "update person");
            sqlx::query("UPDATE person SET name = ?, email = ? WHERE id = ?")
                .bind(&p.name)
                .bind(&p.email)
                .bind(&p.id)
                .execute(&mut *conn)
                .await?
                .rows_affected()
        }
        Staged::Delete(id) => {
            tracing::debug!(id = %id, "delete person");
            sqlx::query("DELETE FROM person WHERE id = ?")
                .bind(id)
                .execute(&mut *conn)
                .await?
                .rows_affected()
        }
    };
    Ok(affected > 0)
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    match e {
        sqlx::Error::Database(db) => db.is_unique_violation(),
        _ => false,
    }
}
