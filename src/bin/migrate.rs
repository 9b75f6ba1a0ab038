use shoe_store::{config::AppConfig, store::CatalogStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    let store = CatalogStore::open(&config.database_url).await?;
    store.ensure_schema().await?;
    println!("Schema ready at {}", config.database_url);
    Ok(())
}
