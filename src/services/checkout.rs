use crate::{
    dto::{
        cart::Cart,
        checkout::{CheckoutReceipt, CheckoutReview, CheckoutState, ClearCartSignal},
    },
    error::{AppError, AppResult},
    store::CatalogStore,
};

/// Turns a handed-off cart into sales rows.
///
/// Starts in `Reviewing`; a successful [`CheckoutProcessor::checkout`] moves
/// it to `Settled`, after which it accepts no further checkout.
pub struct CheckoutProcessor {
    store: CatalogStore,
    cart: Cart,
    state: CheckoutState,
    profit: i64,
}

impl CheckoutProcessor {
    pub async fn start(store: CatalogStore, cart: Cart) -> AppResult<Self> {
        let profit = store.total_profit().await?;
        Ok(Self {
            store,
            cart,
            state: CheckoutState::Reviewing,
            profit,
        })
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn state(&self) -> CheckoutState {
        self.state
    }

    pub fn compute_total(&self) -> AppResult<i64> {
        self.cart.total()
    }

    pub fn profit_display(&self) -> i64 {
        self.profit
    }

    pub fn can_checkout(&self) -> bool {
        self.state == CheckoutState::Reviewing && !self.cart.is_empty()
    }

    pub fn review(&self) -> AppResult<CheckoutReview> {
        Ok(CheckoutReview {
            state: self.state,
            items: self.cart.items().to_vec(),
            total: self.compute_total()?,
            profit: self.profit,
        })
    }

    /// Record one sale per cart item, in cart order.
    ///
    /// Rows are written one at a time with no enclosing transaction. If a
    /// write fails, rows already written stay and the processor remains in
    /// `Reviewing`.
    pub async fn checkout(&mut self) -> AppResult<CheckoutReceipt> {
        if self.state == CheckoutState::Settled {
            return Err(AppError::AlreadySettled);
        }
        if self.cart.is_empty() {
            return Err(AppError::EmptyCart);
        }

        // Reject before writing anything if the ledger sum would leave i64.
        let total = self.compute_total()?;
        if self.profit.checked_add(total).is_none() {
            return Err(AppError::Validation("profit total is out of range".into()));
        }

        let mut sales = Vec::with_capacity(self.cart.len());
        for item in self.cart.items() {
            match self.store.record_sale(&item.name, item.price).await {
                Ok(sale) => sales.push(sale),
                Err(err) => {
                    tracing::warn!(
                        recorded = sales.len(),
                        remaining = self.cart.len() - sales.len(),
                        error = %err,
                        "checkout interrupted"
                    );
                    return Err(err);
                }
            }
        }

        self.profit = self.store.total_profit().await?;
        self.state = CheckoutState::Settled;

        tracing::info!(items = sales.len(), total, profit = self.profit, "checkout settled");

        Ok(CheckoutReceipt {
            sales,
            total,
            profit: self.profit,
            signal: ClearCartSignal { clear_cart: true },
        })
    }

    pub async fn refresh_profit(&mut self) -> AppResult<i64> {
        self.profit = self.store.total_profit().await?;
        Ok(self.profit)
    }
}
