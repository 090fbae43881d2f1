use crate::shared::core::primitives::{Amount, ProductId};

#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum DecideError {
    #[error("requested amount {requested} of product {product_id} exceeds stock of {available}")]
    OutOfStock {
        product_id: ProductId,
        requested: Amount,
        available: Amount,
    },

    #[error("product {product_id} is not in the cart")]
    NotInCart { product_id: ProductId },
}
