//! Person API server: loads settings from the environment (and `.env`), prepares the
//! person table, and serves the router.

use person_api::{app, AppState, PersonStore, Settings};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("person_api=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    tracing::info!(mode = ?settings.mode, database_url = %settings.database_url, "starting");

    let store = PersonStore::connect(&settings).await?;
    if settings.mode.is_test() {
        store.reset().await?;
    } else {
        store.init().await?;
    }

    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(AppState::new(store.clone())))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    store.close().await;
    tracing::info!("stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
