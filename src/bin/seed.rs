use shoe_store::{
    config::AppConfig,
    dto::products::ProductDraft,
    models::{Color, Size},
    services::catalog::CatalogManager,
    store::CatalogStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let store = CatalogStore::connect(&config.database_url).await?;
    let mut catalog = CatalogManager::load(store).await?;

    if !catalog.products().is_empty() {
        println!(
            "Catalog already has {} products, nothing to seed",
            catalog.products().len()
        );
        return Ok(());
    }

    let products = vec![
        ("Runner", "1200", Color::Black, Size::Nine, "3"),
        ("Court Classic", "1800", Color::White, Size::Ten, "5"),
        ("Trail Blazer", "2500", Color::Red, Size::Eight, "2"),
        ("Canvas Slip-On", "900", Color::White, Size::Seven, "10"),
    ];

    for (name, price, color, size, quantity) in products {
        let product = catalog
            .create(ProductDraft {
                name: name.into(),
                price: price.into(),
                color,
                size,
                quantity: quantity.into(),
                image_uri: None,
            })
            .await?;
        println!("Seeded {} (id={})", product.name, product.id);
    }

    println!("Seed completed");
    Ok(())
}
