// Wires a cart store and its handlers to in-memory collaborators.

use crate::modules::cart::application::cart_store::{CartStore, DEFAULT_CART_KEY};
use crate::modules::cart::core::product::LineItem;
use crate::modules::cart::use_cases::add_product::handler::AddProductHandler;
use crate::modules::cart::use_cases::remove_product::handler::RemoveProductHandler;
use crate::modules::cart::use_cases::update_product_amount::handler::UpdateProductAmountHandler;
use crate::shared::infrastructure::cart_storage::in_memory::InMemoryCartStorage;
use crate::shared::infrastructure::notifications::in_memory::InMemoryNotificationSink;
use crate::shared::infrastructure::storefront_api::in_memory::InMemoryStorefrontApi;
use crate::shell::state::AppState;
use std::sync::Arc;

pub struct CartHarness {
    pub storage: Arc<InMemoryCartStorage>,
    pub api: Arc<InMemoryStorefrontApi>,
    pub notifications: Arc<InMemoryNotificationSink>,
    pub store: Arc<CartStore>,
}

impl CartHarness {
    pub async fn empty() -> Self {
        Self::from_storage(InMemoryCartStorage::new()).await
    }

    /// Seeds the slot directly, so the seed does not count as a write.
    pub async fn with_items(items: Vec<LineItem>) -> Self {
        let raw = serde_json::to_string(&items).unwrap();
        Self::from_storage(InMemoryCartStorage::with_slot(DEFAULT_CART_KEY, raw)).await
    }

    async fn from_storage(storage: InMemoryCartStorage) -> Self {
        let storage = Arc::new(storage);
        let store = Arc::new(CartStore::open(DEFAULT_CART_KEY, storage.clone()).await);
        Self {
            storage,
            api: Arc::new(InMemoryStorefrontApi::new()),
            notifications: Arc::new(InMemoryNotificationSink::new()),
            store,
        }
    }

    pub async fn persisted(&self) -> Option<String> {
        self.storage.slot(DEFAULT_CART_KEY).await
    }

    pub fn add_handler(&self) -> AddProductHandler {
        AddProductHandler::new(
            self.store.clone(),
            self.api.clone(),
            self.api.clone(),
            self.notifications.clone(),
        )
    }

    pub fn remove_handler(&self) -> RemoveProductHandler {
        RemoveProductHandler::new(self.store.clone(), self.notifications.clone())
    }

    pub fn update_handler(&self) -> UpdateProductAmountHandler {
        UpdateProductAmountHandler::new(
            self.store.clone(),
            self.api.clone(),
            self.notifications.clone(),
        )
    }

    pub fn app_state(&self) -> AppState {
        AppState {
            store: self.store.clone(),
            add_product: Arc::new(self.add_handler()),
            remove_product: Arc::new(self.remove_handler()),
            update_product_amount: Arc::new(self.update_handler()),
        }
    }
}
