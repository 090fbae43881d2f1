use serde::{Deserialize, Serialize};

use crate::shared::core::primitives::ProductId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveProduct {
    pub product_id: ProductId,
}
