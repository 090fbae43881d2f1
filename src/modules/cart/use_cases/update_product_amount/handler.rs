use crate::modules::cart::application::cart_store::CartStore;
use crate::modules::cart::application::errors::CartError;
use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::core::notice::CartNotice;
use crate::modules::cart::use_cases::update_product_amount::command::UpdateProductAmount;
use crate::modules::cart::use_cases::update_product_amount::decide::{
    UpdateDecision, decide_update,
};
use crate::shared::infrastructure::notifications::NotificationSink;
use crate::shared::infrastructure::storefront_api::StockService;
use std::sync::Arc;

pub struct UpdateProductAmountHandler {
    store: Arc<CartStore>,
    stock: Arc<dyn StockService>,
    notifications: Arc<dyn NotificationSink>,
}

impl UpdateProductAmountHandler {
    pub fn new(
        store: Arc<CartStore>,
        stock: Arc<dyn StockService>,
        notifications: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            store,
            stock,
            notifications,
        }
    }

    #[tracing::instrument(skip(self), fields(product_id = command.product_id, amount = command.amount))]
    pub async fn handle(&self, command: UpdateProductAmount) -> Result<Cart, CartError> {
        if command.is_ignorable() {
            tracing::debug!("ignoring amount below one");
            return Ok(self.store.snapshot().await);
        }

        let result = self.apply(command).await;
        if let Err(e) = &result {
            tracing::warn!(error = %e, "update product amount failed");
            self.notifications
                .error(e.notice(CartNotice::UpdateFailed).message());
        }
        result
    }

    async fn apply(&self, command: UpdateProductAmount) -> Result<Cart, CartError> {
        let tx = self.store.begin().await;
        let stock = self.stock.stock(command.product_id).await?;

        let next = match decide_update(tx.cart(), &command, &stock) {
            // `handle` returns before the stock lookup for these; the arm keeps the match total.
            UpdateDecision::Ignore => return Ok(tx.cart().clone()),
            UpdateDecision::SetAmount { amount } => {
                tx.cart().clone().with_amount(command.product_id, amount)
            }
            UpdateDecision::Rejected { reason } => return Err(reason.into()),
        };

        let cart = tx.commit(next).await?;
        tracing::info!("product amount updated");
        Ok(cart)
    }
}
