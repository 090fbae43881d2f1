use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::core::decision::DecideError;
use crate::modules::cart::core::product::Stock;
use crate::modules::cart::use_cases::add_product::command::AddProduct;
use crate::shared::core::primitives::Amount;

#[derive(Debug, PartialEq, Eq)]
pub enum AddDecision {
    /// The product is already in the cart; bump it to `amount`.
    Increment { amount: Amount },
    /// The product is new; fetch it from the catalog and append it at amount 1.
    Append,
    Rejected { reason: DecideError },
}

pub fn decide_add(cart: &Cart, command: &AddProduct, stock: &Stock) -> AddDecision {
    let current = cart.amount_of(command.product_id);
    // An amount that cannot grow any further is out of stock by definition.
    let requested = current.unwrap_or(0).checked_add(1);

    match requested {
        Some(requested) if requested <= stock.amount => match current {
            Some(_) => AddDecision::Increment { amount: requested },
            None => AddDecision::Append,
        },
        _ => AddDecision::Rejected {
            reason: DecideError::OutOfStock {
                product_id: command.product_id,
                requested: requested.unwrap_or(Amount::MAX),
                available: stock.amount,
            },
        },
    }
}
