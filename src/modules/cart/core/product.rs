use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::shared::core::primitives::{Amount, ProductId};

/// Catalog record. Only `id` is required; any attribute the catalog serves
/// beyond the typed ones is kept verbatim in `attributes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// Maximum purchasable quantity of one product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    pub amount: Amount,
}

/// One product entry in the cart. Serialized flat: `{id, ...product attributes, amount}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(flatten)]
    pub product: Product,
    pub amount: Amount,
}

impl LineItem {
    pub fn new(mut product: Product) -> Self {
        // `amount` belongs to the line, never to the product.
        product.attributes.remove("amount");
        Self { product, amount: 1 }
    }

    pub fn id(&self) -> ProductId {
        self.product.id
    }
}
