use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::checkout::{CheckoutReceipt, CheckoutReview},
    error::AppResult,
    response::{ApiResponse, Meta},
    services::checkout::CheckoutProcessor,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(review).post(checkout))
}

#[utoipa::path(
    get,
    path = "/api/checkout",
    responses(
        (status = 200, description = "Cart under review with total and profit", body = ApiResponse<CheckoutReview>)
    ),
    tag = "Checkout"
)]
pub async fn review(State(state): State<AppState>) -> AppResult<Json<ApiResponse<CheckoutReview>>> {
    let cart = state.catalog.lock().await.hand_off();
    let processor = CheckoutProcessor::start(state.store.clone(), cart).await?;
    let review = processor.review()?;
    let meta = Meta::with_profit(review.total, review.profit);
    Ok(Json(ApiResponse::success("Reviewing", review, Some(meta))))
}

#[utoipa::path(
    post,
    path = "/api/checkout",
    responses(
        (status = 200, description = "Sales recorded", body = ApiResponse<CheckoutReceipt>),
        (status = 400, description = "Cart is empty"),
    ),
    tag = "Checkout"
)]
pub async fn checkout(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<CheckoutReceipt>>> {
    let mut catalog = state.catalog.lock().await;
    let mut processor = CheckoutProcessor::start(state.store.clone(), catalog.hand_off()).await?;
    let receipt = processor.checkout().await?;
    catalog.apply_signal(receipt.signal);

    let meta = Meta::with_profit(receipt.total, receipt.profit);
    Ok(Json(ApiResponse::success(
        "Checkout success",
        receipt,
        Some(meta),
    )))
}
