mod common;

use axum::extract::State;
use shoe_store::{routes::health::health_check, services::catalog::CatalogManager, state::AppState};

#[tokio::test]
async fn health_check_returns_ok() -> anyhow::Result<()> {
    let store = common::memory_store().await?;
    let catalog = CatalogManager::load(store.clone()).await?;
    let response = health_check(State(AppState::new(store, catalog))).await;
    assert_eq!(response.0.message, "Health check");

    let data = response.0.data.expect("health data");
    assert_eq!(data.status, "ok");
    assert_eq!(data.database, "ok");
    Ok(())
}
