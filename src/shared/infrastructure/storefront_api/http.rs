use crate::modules::cart::core::product::{Product, Stock};
use crate::shared::core::primitives::ProductId;
use crate::shared::infrastructure::storefront_api::{
    ProductCatalog, StockService, StorefrontApiError,
};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// JSON client for the storefront API: `GET {base}/stock/{id}` and `GET {base}/products/{id}`.
#[derive(Debug, Clone)]
pub struct HttpStorefrontApi {
    client: Client,
    base_url: String,
}

impl HttpStorefrontApi {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, StorefrontApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StorefrontApiError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        resource: &'static str,
        path: &str,
        product_id: ProductId,
    ) -> Result<T, StorefrontApiError> {
        let url = format!("{}/{path}/{product_id}", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| StorefrontApiError::Transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(StorefrontApiError::NotFound {
                resource,
                product_id,
            });
        }
        if !status.is_success() {
            tracing::warn!(%status, %url, "storefront API returned non-success status");
            return Err(StorefrontApiError::Status {
                status: status.as_u16(),
                url,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| StorefrontApiError::Decode(e.to_string()))
    }
}

#[async_trait::async_trait]
impl StockService for HttpStorefrontApi {
    async fn stock(&self, product_id: ProductId) -> Result<Stock, StorefrontApiError> {
        self.get_json("stock", "stock", product_id).await
    }
}

#[async_trait::async_trait]
impl ProductCatalog for HttpStorefrontApi {
    async fn product(&self, product_id: ProductId) -> Result<Product, StorefrontApiError> {
        self.get_json("product", "products", product_id).await
    }
}
