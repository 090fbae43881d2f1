// Owned cart state plus the storage slot it is mirrored to.
//
// Every mutation runs inside a `CartTransaction`, which holds the single
// writer lock from the first read until commit. Operations are therefore
// serialized even across their awaits on the storefront API.

use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::core::product::LineItem;
use crate::shared::infrastructure::cart_storage::{CartStorage, StorageError};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

pub const DEFAULT_CART_KEY: &str = "cart";

pub struct CartStore {
    key: String,
    storage: Arc<dyn CartStorage>,
    cart: Mutex<Cart>,
}

impl CartStore {
    /// Loads the cart from `key`. A missing, unreadable or corrupt slot opens as an empty cart.
    pub async fn open(key: impl Into<String>, storage: Arc<dyn CartStorage>) -> Self {
        let key = key.into();
        let cart = match storage.read(&key).await {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<LineItem>>(&raw) {
                Ok(items) => Cart::from(Self::without_empty_lines(&key, items)),
                Err(e) => {
                    tracing::warn!(%key, error = %e, "discarding unparseable cart slot");
                    Cart::new()
                }
            },
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!(%key, error = %e, "cart slot unreadable, starting empty");
                Cart::new()
            }
        };
        tracing::info!(%key, lines = cart.len(), "cart opened");
        Self {
            key,
            storage,
            cart: Mutex::new(cart),
        }
    }

    fn without_empty_lines(key: &str, items: Vec<LineItem>) -> Vec<LineItem> {
        let (kept, dropped): (Vec<_>, Vec<_>) =
            items.into_iter().partition(|item| item.amount > 0);
        for item in &dropped {
            tracing::warn!(
                %key,
                product_id = item.id(),
                amount = item.amount,
                "dropping restored line without a positive amount"
            );
        }
        kept
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub async fn snapshot(&self) -> Cart {
        self.cart.lock().await.clone()
    }

    pub async fn begin(&self) -> CartTransaction<'_> {
        CartTransaction {
            key: &self.key,
            storage: self.storage.as_ref(),
            current: self.cart.lock().await,
        }
    }
}

pub struct CartTransaction<'a> {
    key: &'a str,
    storage: &'a dyn CartStorage,
    current: MutexGuard<'a, Cart>,
}

impl CartTransaction<'_> {
    pub fn cart(&self) -> &Cart {
        &self.current
    }

    /// Persists `next` and only then makes it the current cart.
    pub async fn commit(mut self, next: Cart) -> Result<Cart, StorageError> {
        let raw = serde_json::to_string(&next)?;
        self.storage.write(self.key, &raw).await?;
        *self.current = next.clone();
        Ok(next)
    }
}
