use serde::{Deserialize, Serialize};

use crate::shared::core::primitives::{Amount, ProductId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProductAmount {
    pub product_id: ProductId,
    pub amount: Amount,
}

impl UpdateProductAmount {
    /// Requests below one are dropped without touching stock or storage.
    pub fn is_ignorable(&self) -> bool {
        self.amount <= 0
    }
}
