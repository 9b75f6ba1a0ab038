use sea_orm::entity::prelude::*;

use crate::models::{Color, Size};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub color: Color,
    pub size: Size,
    pub quantity: i64,
    #[sea_orm(column_name = "imageUri")]
    pub image_uri: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
