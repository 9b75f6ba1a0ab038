use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::{Color, Product, Size},
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddToCartRequest {
    pub product_id: i64,
}

/// A product as it looked when it was added to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CartItem {
    pub product_id: i64,
    pub name: String,
    pub price: i64,
    pub color: Color,
    pub size: Size,
    pub quantity: i64,
    pub image_uri: Option<String>,
}

impl From<&Product> for CartItem {
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
            color: product.color,
            size: product.size,
            quantity: product.quantity,
            image_uri: product.image_uri.clone(),
        }
    }
}

/// Ordered, session-local list of snapshots. Duplicates are kept as
/// separate entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct Cart {
    #[schema(value_type = Vec<CartItem>)]
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: CartItem) -> &CartItem {
        self.items.push(item);
        &self.items[self.items.len() - 1]
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of item prices; `0` for an empty cart.
    pub fn total(&self) -> AppResult<i64> {
        self.items
            .iter()
            .try_fold(0_i64, |sum, item| sum.checked_add(item.price))
            .ok_or_else(|| AppError::Validation("cart total is out of range".into()))
    }

    pub fn to_payload(&self) -> AppResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_payload(payload: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(payload)?)
    }
}

impl FromIterator<CartItem> for Cart {
    fn from_iter<I: IntoIterator<Item = CartItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
