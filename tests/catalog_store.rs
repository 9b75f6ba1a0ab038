mod common;

use shoe_store::{
    error::AppError,
    models::{Color, Size},
    store::CatalogStore,
};

use common::{draft, memory_store, runner};

#[tokio::test]
async fn ensure_schema_is_idempotent() -> anyhow::Result<()> {
    let store = memory_store().await?;
    store.ensure_schema().await?;
    store.ensure_schema().await?;

    assert!(store.list_products().await?.is_empty());
    assert_eq!(store.total_profit().await?, 0);
    Ok(())
}

#[tokio::test]
async fn ensure_schema_adds_image_column_to_legacy_table() -> anyhow::Result<()> {
    let store = CatalogStore::open("sqlite::memory:").await?;
    sqlx::query(
        "CREATE TABLE products (id INTEGER PRIMARY KEY AUTOINCREMENT, \
         name TEXT, price INTEGER, color TEXT, size TEXT, quantity INTEGER)",
    )
    .execute(store.pool())
    .await?;
    sqlx::query(
        "INSERT INTO products (name, price, color, size, quantity) \
         VALUES ('Old Boot', 500, 'Red', '11', 1)",
    )
    .execute(store.pool())
    .await?;

    store.ensure_schema().await?;

    let products = store.list_products().await?;
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Old Boot");
    assert_eq!(products[0].color, Color::Red);
    assert_eq!(products[0].size, Size::Eleven);
    assert_eq!(products[0].image_uri, None);

    sqlx::query(
        "INSERT INTO products (name, price, color, size, quantity, imageUri) \
         VALUES ('Blank Pic', 800, 'White', '8', 2, '')",
    )
    .execute(store.pool())
    .await?;
    let blank = store.list_products().await?.remove(0);
    assert_eq!(blank.name, "Blank Pic");
    assert_eq!(blank.image_uri, None);
    Ok(())
}

#[tokio::test]
async fn ensure_schema_surfaces_real_migration_errors() -> anyhow::Result<()> {
    let store = CatalogStore::open("sqlite::memory:").await?;
    sqlx::query("CREATE VIEW products AS SELECT 1 AS id")
        .execute(store.pool())
        .await?;

    let err = store.ensure_schema().await.unwrap_err();
    assert!(matches!(err, AppError::SchemaEvolution(_)), "got {err:?}");
    Ok(())
}

#[tokio::test]
async fn list_is_newest_first_and_reflects_survivors() -> anyhow::Result<()> {
    let store = memory_store().await?;
    let a = store.insert_product(&draft("A", "1", Color::Black, Size::Seven, "1").validate()?).await?;
    let b = store.insert_product(&draft("B", "2", Color::White, Size::Eight, "1").validate()?).await?;
    let c = store.insert_product(&draft("C", "3", Color::Red, Size::Nine, "1").validate()?).await?;
    assert!(a < b && b < c);

    store.delete_product(b).await?;
    store
        .update_product(a, &draft("A2", "10", Color::Red, Size::Twelve, "4").validate()?)
        .await?;

    let ids: Vec<i64> = store.list_products().await?.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![c, a]);

    let a_row = store.find_product(a).await?.expect("updated product");
    assert_eq!(a_row.name, "A2");
    assert_eq!(a_row.price, 10);
    assert_eq!(a_row.size, Size::Twelve);
    assert_eq!(a_row.quantity, 4);
    assert!(store.find_product(b).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn ids_are_never_reused_after_delete() -> anyhow::Result<()> {
    let store = memory_store().await?;
    let fields = runner().validate()?;
    let first = store.insert_product(&fields).await?;
    store.delete_product(first).await?;
    let second = store.insert_product(&fields).await?;
    assert!(second > first);
    Ok(())
}

#[tokio::test]
async fn update_and_delete_of_missing_id_report_not_found() -> anyhow::Result<()> {
    let store = memory_store().await?;
    let fields = runner().validate()?;

    let err = store.update_product(42, &fields).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound));
    let err = store.delete_product(42).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound));
    assert!(store.list_products().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn quotes_in_fields_are_stored_verbatim() -> anyhow::Result<()> {
    let store = memory_store().await?;
    let other = store.insert_product(&runner().validate()?).await?;

    let mut input = draft(
        "O'Brien'); DROP TABLE products; --",
        "700",
        Color::White,
        Size::Ten,
        "2",
    );
    input.image_uri = Some("file:///tmp/it's here.png".into());
    let id = store.insert_product(&input.validate()?).await?;

    let stored = store.find_product(id).await?.expect("quoted product");
    assert_eq!(stored.name, "O'Brien'); DROP TABLE products; --");
    assert_eq!(stored.image_uri.as_deref(), Some("file:///tmp/it's here.png"));

    let untouched = store.find_product(other).await?.expect("other product");
    assert_eq!(untouched.name, "Runner");
    assert_eq!(store.list_products().await?.len(), 2);

    let sale = store.record_sale("O'Brien", 700).await?;
    assert_eq!(sale.name, "O'Brien");
    Ok(())
}

#[tokio::test]
async fn profit_is_the_sum_of_recorded_sales() -> anyhow::Result<()> {
    let store = memory_store().await?;
    assert_eq!(store.total_profit().await?, 0);

    store.record_sale("Runner", 1200).await?;
    store.record_sale("Slide", 300).await?;
    store.record_sale("Runner", 1200).await?;

    let sales = store.list_sales().await?;
    assert_eq!(sales.len(), 3);
    assert_eq!(sales[1].name, "Slide");
    assert_eq!(store.total_profit().await?, sales.iter().map(|s| s.price).sum::<i64>());
    assert_eq!(store.total_profit().await?, 2700);
    Ok(())
}

#[tokio::test]
async fn data_survives_reopening_the_database() -> anyhow::Result<()> {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_nanos();
    let path = std::env::temp_dir().join(format!("shoe-store-{}-{nanos}.db", std::process::id()));
    let url = format!("sqlite://{}?mode=rwc", path.display());

    let store = CatalogStore::connect(&url).await?;
    store.insert_product(&runner().validate()?).await?;
    store.record_sale("Runner", 1200).await?;
    store.pool().close().await;

    let reopened = CatalogStore::connect(&url).await?;
    assert_eq!(reopened.list_products().await?.len(), 1);
    assert_eq!(reopened.total_profit().await?, 1200);
    reopened.pool().close().await;

    let _ = std::fs::remove_file(&path);
    Ok(())
}
