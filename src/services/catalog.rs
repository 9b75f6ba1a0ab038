use crate::{
    dto::{
        cart::{Cart, CartItem},
        checkout::ClearCartSignal,
        products::ProductDraft,
    },
    error::{AppError, AppResult},
    models::Product,
    store::CatalogStore,
};

/// Product CRUD plus the session cart.
///
/// The listing is a read-only cache of the store, refreshed after every
/// mutation. The cart holds snapshots and never touches stored rows.
pub struct CatalogManager {
    store: CatalogStore,
    products: Vec<Product>,
    cart: Cart,
}

impl CatalogManager {
    pub async fn load(store: CatalogStore) -> AppResult<Self> {
        let mut manager = Self {
            store,
            products: Vec::new(),
            cart: Cart::new(),
        };
        manager.refresh().await?;
        Ok(manager)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub async fn refresh(&mut self) -> AppResult<()> {
        self.products = self.store.list_products().await?;
        Ok(())
    }

    pub async fn create(&mut self, draft: ProductDraft) -> AppResult<Product> {
        let fields = draft.validate()?;
        let id = self.store.insert_product(&fields).await?;
        self.refresh().await?;
        Ok(fields.into_product(id))
    }

    pub async fn update(&mut self, id: i64, draft: ProductDraft) -> AppResult<Product> {
        let fields = draft.validate()?;
        self.store.update_product(id, &fields).await?;
        self.refresh().await?;
        Ok(fields.into_product(id))
    }

    pub async fn delete(&mut self, id: i64) -> AppResult<()> {
        self.store.delete_product(id).await?;
        self.refresh().await
    }

    pub fn add_to_cart(&mut self, product: &Product) -> &CartItem {
        tracing::debug!(product_id = product.id, "added to cart");
        self.cart.push(CartItem::from(product))
    }

    /// Snapshot a product from the current listing into the cart.
    pub fn add_to_cart_by_id(&mut self, id: i64) -> AppResult<CartItem> {
        let product = self
            .products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(AppError::NotFound)?;
        Ok(self.add_to_cart(&product).clone())
    }

    pub fn clear_cart(&mut self) {
        tracing::debug!(items = self.cart.len(), "cart cleared");
        self.cart.clear();
    }

    /// Copy of the cart to give to checkout.
    pub fn hand_off(&self) -> Cart {
        self.cart.clone()
    }

    pub fn apply_signal(&mut self, signal: ClearCartSignal) {
        if signal.clear_cart {
            self.clear_cart();
        }
    }
}
