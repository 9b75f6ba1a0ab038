use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema, Clone)]
pub struct Meta {
    pub total: Option<i64>,
    pub profit: Option<i64>,
}

impl Meta {
    pub fn new(total: i64) -> Self {
        Self {
            total: Some(total),
            profit: None,
        }
    }

    pub fn with_profit(total: i64, profit: i64) -> Self {
        Self {
            total: Some(total),
            profit: Some(profit),
        }
    }

    pub fn empty() -> Self {
        Self {
            total: None,
            profit: None,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: Option<T>,
    pub meta: Option<Meta>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T, meta: Option<Meta>) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            meta,
        }
    }
}
