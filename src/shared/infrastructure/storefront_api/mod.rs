// Read-only collaborators of the cart: stock levels and catalog records.
//
// Both are served by the same remote storefront API, so the HTTP adapter
// implements both ports on one client.

pub mod http;
pub mod in_memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::cart::core::product::{Product, Stock};
use crate::shared::core::primitives::ProductId;

#[derive(Debug, Error)]
pub enum StorefrontApiError {
    #[error("{resource} {product_id} not found")]
    NotFound {
        resource: &'static str,
        product_id: ProductId,
    },

    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("could not decode response: {0}")]
    Decode(String),
}

#[async_trait]
pub trait StockService: Send + Sync {
    /// Current maximum purchasable quantity. Never cached.
    async fn stock(&self, product_id: ProductId) -> Result<Stock, StorefrontApiError>;
}

#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn product(&self, product_id: ProductId) -> Result<Product, StorefrontApiError>;
}
