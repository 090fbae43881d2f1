use crate::modules::cart::application::cart_store::CartStore;
use crate::modules::cart::application::errors::CartError;
use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::core::notice::CartNotice;
use crate::modules::cart::use_cases::remove_product::command::RemoveProduct;
use crate::modules::cart::use_cases::remove_product::decide::{RemoveDecision, decide_remove};
use crate::shared::infrastructure::notifications::NotificationSink;
use std::sync::Arc;

pub struct RemoveProductHandler {
    store: Arc<CartStore>,
    notifications: Arc<dyn NotificationSink>,
}

impl RemoveProductHandler {
    pub fn new(store: Arc<CartStore>, notifications: Arc<dyn NotificationSink>) -> Self {
        Self {
            store,
            notifications,
        }
    }

    #[tracing::instrument(skip(self), fields(product_id = command.product_id))]
    pub async fn handle(&self, command: RemoveProduct) -> Result<Cart, CartError> {
        let result = self.apply(command).await;
        if let Err(e) = &result {
            tracing::warn!(error = %e, "remove product failed");
            self.notifications
                .error(e.notice(CartNotice::RemoveFailed).message());
        }
        result
    }

    async fn apply(&self, command: RemoveProduct) -> Result<Cart, CartError> {
        let tx = self.store.begin().await;
        let next = match decide_remove(tx.cart(), &command) {
            RemoveDecision::Remove { index } => tx.cart().clone().without_index(index),
            RemoveDecision::Rejected { reason } => return Err(reason.into()),
        };
        let cart = tx.commit(next).await?;
        tracing::info!(lines = cart.len(), "product removed");
        Ok(cart)
    }
}
