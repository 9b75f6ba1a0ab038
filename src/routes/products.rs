use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    dto::products::{ProductDraft, ProductList},
    error::{AppError, AppResult},
    models::Product,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}

#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "List products, newest first", body = ApiResponse<ProductList>)
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let mut catalog = state.catalog.lock().await;
    catalog.refresh().await?;
    let items = catalog.products().to_vec();
    let meta = Meta::new(items.len() as i64);
    Ok(Json(ApiResponse::success(
        "Products",
        ProductList { items },
        Some(meta),
    )))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Get product", body = ApiResponse<Product>),
        (status = 404, description = "Product not found"),
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let product = state.store.find_product(id).await?;
    let product = match product {
        Some(p) => p,
        None => return Err(AppError::NotFound),
    };
    Ok(Json(ApiResponse::success("Product", product, None)))
}

#[utoipa::path(
    post,
    path = "/api/products",
    request_body = ProductDraft,
    responses(
        (status = 200, description = "Create product", body = ApiResponse<Product>),
        (status = 400, description = "Validation failed"),
    ),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductDraft>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let product = state.catalog.lock().await.create(payload).await?;
    Ok(Json(ApiResponse::success(
        "Product created",
        product,
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    request_body = ProductDraft,
    responses(
        (status = 200, description = "Updated product", body = ApiResponse<Product>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Product not found"),
    ),
    tag = "Products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ProductDraft>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let product = state.catalog.lock().await.update(id, payload).await?;
    Ok(Json(ApiResponse::success(
        "Updated",
        product,
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Deleted product"),
        (status = 404, description = "Product not found"),
    ),
    tag = "Products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    state.catalog.lock().await.delete(id).await?;
    Ok(Json(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    )))
}
