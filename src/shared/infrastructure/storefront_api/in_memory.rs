use crate::modules::cart::core::product::{Product, Stock};
use crate::shared::core::primitives::{Amount, ProductId};
use crate::shared::infrastructure::storefront_api::{
    ProductCatalog, StockService, StorefrontApiError,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryStorefrontApi {
    products: RwLock<HashMap<ProductId, Product>>,
    stock: RwLock<HashMap<ProductId, Amount>>,
    stock_calls: AtomicUsize,
    catalog_calls: AtomicUsize,
    delay_ms: AtomicU64,
    is_offline: AtomicBool,
}

impl InMemoryStorefrontApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn put_product(&self, product: Product, stock: Amount) {
        self.stock.write().await.insert(product.id, stock);
        self.products.write().await.insert(product.id, product);
    }

    pub async fn set_stock(&self, product_id: ProductId, amount: Amount) {
        self.stock.write().await.insert(product_id, amount);
    }

    pub fn set_delay_ms(&self, ms: u64) {
        self.delay_ms.store(ms, Ordering::SeqCst);
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    pub fn stock_calls(&self) -> usize {
        self.stock_calls.load(Ordering::SeqCst)
    }

    pub fn catalog_calls(&self) -> usize {
        self.catalog_calls.load(Ordering::SeqCst)
    }

    async fn simulate_network(&self) -> Result<(), StorefrontApiError> {
        let delay = self.delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(StorefrontApiError::Transport(
                "Storefront API offline".into(),
            ));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl StockService for InMemoryStorefrontApi {
    async fn stock(&self, product_id: ProductId) -> Result<Stock, StorefrontApiError> {
        self.stock_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate_network().await?;
        self.stock
            .read()
            .await
            .get(&product_id)
            .map(|amount| Stock { amount: *amount })
            .ok_or(StorefrontApiError::NotFound {
                resource: "stock",
                product_id,
            })
    }
}

#[async_trait::async_trait]
impl ProductCatalog for InMemoryStorefrontApi {
    async fn product(&self, product_id: ProductId) -> Result<Product, StorefrontApiError> {
        self.catalog_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate_network().await?;
        self.products
            .read()
            .await
            .get(&product_id)
            .cloned()
            .ok_or(StorefrontApiError::NotFound {
                resource: "product",
                product_id,
            })
    }
}
