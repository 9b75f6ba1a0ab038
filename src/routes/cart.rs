use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::cart::{AddToCartRequest, Cart, CartItem},
    error::AppResult,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(cart_list).post(add_to_cart).delete(clear_cart))
}

#[utoipa::path(
    get,
    path = "/api/cart",
    responses(
        (status = 200, description = "Items in the session cart", body = ApiResponse<Cart>)
    ),
    tag = "Cart"
)]
pub async fn cart_list(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Cart>>> {
    let cart = state.catalog.lock().await.hand_off();
    let meta = Meta::new(cart.total()?);
    Ok(Json(ApiResponse::success("OK", cart, Some(meta))))
}

#[utoipa::path(
    post,
    path = "/api/cart",
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Snapshot added to cart", body = ApiResponse<CartItem>),
        (status = 404, description = "Product not in the catalog listing"),
    ),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    Json(payload): Json<AddToCartRequest>,
) -> AppResult<Json<ApiResponse<CartItem>>> {
    let item = state
        .catalog
        .lock()
        .await
        .add_to_cart_by_id(payload.product_id)?;
    Ok(Json(ApiResponse::success("OK", item, None)))
}

#[utoipa::path(
    delete,
    path = "/api/cart",
    responses(
        (status = 200, description = "Cart cleared", body = ApiResponse<serde_json::Value>)
    ),
    tag = "Cart"
)]
pub async fn clear_cart(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    state.catalog.lock().await.clear_cart();
    Ok(Json(ApiResponse::success(
        "Cart cleared",
        serde_json::json!({}),
        Some(Meta::empty()),
    )))
}
