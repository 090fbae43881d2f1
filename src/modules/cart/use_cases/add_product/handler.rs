use crate::modules::cart::application::cart_store::CartStore;
use crate::modules::cart::application::errors::CartError;
use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::core::notice::CartNotice;
use crate::modules::cart::core::product::LineItem;
use crate::modules::cart::use_cases::add_product::command::AddProduct;
use crate::modules::cart::use_cases::add_product::decide::{AddDecision, decide_add};
use crate::shared::infrastructure::notifications::NotificationSink;
use crate::shared::infrastructure::storefront_api::{ProductCatalog, StockService};
use std::sync::Arc;

pub struct AddProductHandler {
    store: Arc<CartStore>,
    stock: Arc<dyn StockService>,
    catalog: Arc<dyn ProductCatalog>,
    notifications: Arc<dyn NotificationSink>,
}

impl AddProductHandler {
    pub fn new(
        store: Arc<CartStore>,
        stock: Arc<dyn StockService>,
        catalog: Arc<dyn ProductCatalog>,
        notifications: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            store,
            stock,
            catalog,
            notifications,
        }
    }

    #[tracing::instrument(skip(self), fields(product_id = command.product_id))]
    pub async fn handle(&self, command: AddProduct) -> Result<Cart, CartError> {
        let result = self.apply(command).await;
        if let Err(e) = &result {
            tracing::warn!(error = %e, "add product failed");
            self.notifications
                .error(e.notice(CartNotice::AddFailed).message());
        }
        result
    }

    async fn apply(&self, command: AddProduct) -> Result<Cart, CartError> {
        let tx = self.store.begin().await;
        let stock = self.stock.stock(command.product_id).await?;

        let next = match decide_add(tx.cart(), &command, &stock) {
            AddDecision::Increment { amount } => {
                tx.cart().clone().with_amount(command.product_id, amount)
            }
            AddDecision::Append => {
                let mut product = self.catalog.product(command.product_id).await?;
                product.id = command.product_id;
                tx.cart().clone().with_appended(LineItem::new(product))
            }
            AddDecision::Rejected { reason } => return Err(reason.into()),
        };

        let cart = tx.commit(next).await?;
        tracing::info!(lines = cart.len(), "product added");
        Ok(cart)
    }
}
