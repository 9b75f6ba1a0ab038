use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::response::{ApiResponse, Meta};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Cart is empty")]
    EmptyCart,

    #[error("Checkout already settled")]
    AlreadySettled,

    #[error("Schema migration failed")]
    SchemaEvolution(#[source] sqlx::Error),

    #[error("Database error")]
    DbError(#[from] sqlx::Error),

    #[error("ORM error")]
    OrmError(#[from] sea_orm::DbErr),

    #[error("Invalid cart payload")]
    Payload(#[from] serde_json::Error),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorData {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::EmptyCart | AppError::Payload(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::AlreadySettled => StatusCode::CONFLICT,
            AppError::SchemaEvolution(_)
            | AppError::DbError(_)
            | AppError::OrmError(_)
            | AppError::Internal(_) => {
                tracing::error!(error = ?self, "store failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ApiResponse {
            message: self.to_string(),
            data: Some(ErrorData {
                error: self.to_string(),
            }),
            meta: Some(Meta::empty()),
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
