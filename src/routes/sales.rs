use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::checkout::SalesLedger,
    error::AppResult,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_sales))
}

#[utoipa::path(
    get,
    path = "/api/sales",
    responses(
        (status = 200, description = "Sales ledger and running profit", body = ApiResponse<SalesLedger>)
    ),
    tag = "Sales"
)]
pub async fn list_sales(State(state): State<AppState>) -> AppResult<Json<ApiResponse<SalesLedger>>> {
    let sales = state.store.list_sales().await?;
    let profit = state.store.total_profit().await?;
    let meta = Meta::with_profit(sales.len() as i64, profit);
    Ok(Json(ApiResponse::success(
        "Sales",
        SalesLedger { sales, profit },
        Some(meta),
    )))
}
