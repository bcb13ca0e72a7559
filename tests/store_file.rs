//! File-backed store: data survives reopening, reset wipes it.

use person_api::{CommitOutcome, Mode, NewPerson, PersonStore, Settings};

fn settings_for(dir: &tempfile::TempDir) -> Settings {
    let path = dir.path().join("people.sqlite3");
    Settings {
        mode: Mode::Test,
        database_url: format!("sqlite://{}", path.display()),
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        max_connections: 2,
    }
}

#[tokio::test]
async fn committed_rows_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let settings = settings_for(&dir);

    let store = PersonStore::connect(&settings).await.unwrap();
    store.init().await.unwrap();
    let mut uow = store.begin();
    let person = uow.create(NewPerson {
        name: "test".into(),
        email: "test@mail.com".into(),
    });
    assert_eq!(uow.commit().await.unwrap(), CommitOutcome::Committed);
    store.close().await;

    let reopened = PersonStore::connect(&settings).await.unwrap();
    reopened.init().await.unwrap();
    assert_eq!(reopened.find_by_email("test@mail.com").await.unwrap(), Some(person));

    reopened.reset().await.unwrap();
    assert_eq!(reopened.count().await.unwrap(), 0);
    reopened.close().await;
}

#[tokio::test]
async fn uncommitted_unit_of_work_leaves_no_trace() {
    let dir = tempfile::tempdir().unwrap();
    let settings = settings_for(&dir);
    let store = PersonStore::connect(&settings).await.unwrap();
    store.init().await.unwrap();

    {
        let mut uow = store.begin();
        uow.create(NewPerson {
            name: "ghost".into(),
            email: "ghost@mail.com".into(),
        });
    }
    assert!(store.find_by_name("ghost").await.unwrap().is_none());

    let closed = store.clone();
    closed.close().await;
    let err = store.ping().await.unwrap_err();
    assert!(matches!(err, person_api::AppError::Db(_)));
}
