use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::{Color, Product, ProductFields, Size},
};

/// Product form input as typed by the user. Numbers arrive as text and are
/// only trusted after [`ProductDraft::validate`].
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ProductDraft {
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub color: Color,
    #[serde(default)]
    pub size: Size,
    #[serde(default = "default_quantity")]
    pub quantity: String,
    #[serde(default)]
    pub image_uri: Option<String>,
}

/// Highest accepted unit price. Keeps cart totals and the running profit
/// far inside `i64`.
pub const MAX_PRICE: i64 = 1_000_000_000_000;

fn default_quantity() -> String {
    "1".to_string()
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            price: String::new(),
            color: Color::default(),
            size: Size::default(),
            quantity: default_quantity(),
            image_uri: None,
        }
    }
}

impl ProductDraft {
    pub fn validate(&self) -> AppResult<ProductFields> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("name must not be blank".into()));
        }
        let price = parse_non_negative("price", &self.price)?;
        if price > MAX_PRICE {
            return Err(AppError::Validation(format!(
                "price must not exceed {MAX_PRICE}"
            )));
        }
        let quantity = parse_non_negative("quantity", &self.quantity)?;
        let image_uri = self
            .image_uri
            .as_ref()
            .filter(|uri| !uri.trim().is_empty())
            .cloned();

        Ok(ProductFields {
            name: self.name.clone(),
            price,
            color: self.color,
            size: self.size,
            quantity,
            image_uri,
        })
    }
}

impl From<&Product> for ProductDraft {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.to_string(),
            color: product.color,
            size: product.size,
            quantity: product.quantity.to_string(),
            image_uri: product.image_uri.clone(),
        }
    }
}

fn parse_non_negative(field: &str, raw: &str) -> AppResult<i64> {
    let value = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| AppError::Validation(format!("{field} must be a whole number")))?;
    if value < 0 {
        return Err(AppError::Validation(format!("{field} must not be negative")));
    }
    Ok(value)
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductList {
    #[schema(value_type = Vec<Product>)]
    pub items: Vec<Product>,
}
