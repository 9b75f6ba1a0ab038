use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        cart::{AddToCartRequest, Cart, CartItem},
        checkout::{CheckoutReceipt, CheckoutReview, CheckoutState, ClearCartSignal, SalesLedger},
        products::{ProductDraft, ProductList},
    },
    models::{Color, Product, SaleRecord, Size},
    response::{ApiResponse, Meta},
    routes::{cart, checkout, health, products, sales},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::list_products,
        products::create_product,
        products::get_product,
        products::update_product,
        products::delete_product,
        cart::cart_list,
        cart::add_to_cart,
        cart::clear_cart,
        checkout::review,
        checkout::checkout,
        sales::list_sales
    ),
    components(
        schemas(
            Product,
            Color,
            Size,
            SaleRecord,
            ProductDraft,
            ProductList,
            AddToCartRequest,
            Cart,
            CartItem,
            CheckoutState,
            CheckoutReview,
            CheckoutReceipt,
            ClearCartSignal,
            SalesLedger,
            Meta,
            ApiResponse<Product>,
            ApiResponse<ProductList>,
            ApiResponse<Cart>,
            ApiResponse<CheckoutReceipt>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Catalog endpoints"),
        (name = "Cart", description = "Session cart endpoints"),
        (name = "Checkout", description = "Checkout endpoints"),
        (name = "Sales", description = "Sales ledger endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
