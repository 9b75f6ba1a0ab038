#![allow(dead_code)]

use shoe_store::{
    dto::products::ProductDraft,
    models::{Color, Size},
    store::CatalogStore,
};

pub async fn memory_store() -> anyhow::Result<CatalogStore> {
    Ok(CatalogStore::connect("sqlite::memory:").await?)
}

pub fn draft(name: &str, price: &str, color: Color, size: Size, quantity: &str) -> ProductDraft {
    ProductDraft {
        name: name.into(),
        price: price.into(),
        color,
        size,
        quantity: quantity.into(),
        image_uri: None,
    }
}

pub fn runner() -> ProductDraft {
    draft("Runner", "1200", Color::Black, Size::Nine, "3")
}
