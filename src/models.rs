use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum Color {
    #[default]
    #[sea_orm(string_value = "Black")]
    Black,
    #[sea_orm(string_value = "White")]
    White,
    #[sea_orm(string_value = "Red")]
    Red,
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum Size {
    #[default]
    #[serde(rename = "7")]
    #[sea_orm(string_value = "7")]
    Seven,
    #[serde(rename = "8")]
    #[sea_orm(string_value = "8")]
    Eight,
    #[serde(rename = "9")]
    #[sea_orm(string_value = "9")]
    Nine,
    #[serde(rename = "10")]
    #[sea_orm(string_value = "10")]
    Ten,
    #[serde(rename = "11")]
    #[sea_orm(string_value = "11")]
    Eleven,
    #[serde(rename = "12")]
    #[sea_orm(string_value = "12")]
    Twelve,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub color: Color,
    pub size: Size,
    pub quantity: i64,
    pub image_uri: Option<String>,
}

/// Validated product fields, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFields {
    pub name: String,
    pub price: i64,
    pub color: Color,
    pub size: Size,
    pub quantity: i64,
    pub image_uri: Option<String>,
}

impl ProductFields {
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            color: self.color,
            size: self.size,
            quantity: self.quantity,
            image_uri: self.image_uri,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct SaleRecord {
    pub id: i64,
    pub name: String,
    pub price: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_serialize_as_their_stored_labels() {
        assert_eq!(serde_json::to_string(&Color::White).unwrap(), "\"White\"");
        assert_eq!(serde_json::to_string(&Size::Ten).unwrap(), "\"10\"");
        assert_eq!(serde_json::from_str::<Size>("\"12\"").unwrap(), Size::Twelve);
        assert!(serde_json::from_str::<Size>("\"13\"").is_err());
    }
}
