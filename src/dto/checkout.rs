use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{dto::cart::CartItem, models::SaleRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutState {
    Reviewing,
    Settled,
}

/// Sent back to the catalog after checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ClearCartSignal {
    pub clear_cart: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CheckoutReview {
    pub state: CheckoutState,
    pub items: Vec<CartItem>,
    pub total: i64,
    pub profit: i64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CheckoutReceipt {
    pub sales: Vec<SaleRecord>,
    pub total: i64,
    pub profit: i64,
    pub signal: ClearCartSignal,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SalesLedger {
    pub sales: Vec<SaleRecord>,
    pub profit: i64,
}
