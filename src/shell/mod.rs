// Composition root for the cart bounded context.
//
// - Read config from the environment.
// - Instantiate concrete storage, storefront API and notification adapters.
// - Wire them into the cart store and use case handlers.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;

use crate::modules::cart::application::cart_store::CartStore;
use crate::modules::cart::use_cases::add_product::handler::AddProductHandler;
use crate::modules::cart::use_cases::remove_product::handler::RemoveProductHandler;
use crate::modules::cart::use_cases::update_product_amount::handler::UpdateProductAmountHandler;
use crate::shared::infrastructure::cart_storage::CartStorage;
use crate::shared::infrastructure::notifications::NotificationSink;
use crate::shared::infrastructure::storefront_api::{ProductCatalog, StockService};
use crate::shell::state::AppState;
use std::sync::Arc;

/// Opens the cart slot and builds the handlers around one shared store.
pub async fn build_state(
    key: &str,
    storage: Arc<dyn CartStorage>,
    stock: Arc<dyn StockService>,
    catalog: Arc<dyn ProductCatalog>,
    notifications: Arc<dyn NotificationSink>,
) -> AppState {
    let store = Arc::new(CartStore::open(key, storage).await);
    AppState {
        add_product: Arc::new(AddProductHandler::new(
            store.clone(),
            stock.clone(),
            catalog,
            notifications.clone(),
        )),
        remove_product: Arc::new(RemoveProductHandler::new(
            store.clone(),
            notifications.clone(),
        )),
        update_product_amount: Arc::new(UpdateProductAmountHandler::new(
            store.clone(),
            stock,
            notifications,
        )),
        store,
    }
}
