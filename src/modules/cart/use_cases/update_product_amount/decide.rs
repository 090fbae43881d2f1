use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::core::decision::DecideError;
use crate::modules::cart::core::product::Stock;
use crate::modules::cart::use_cases::update_product_amount::command::UpdateProductAmount;
use crate::shared::core::primitives::Amount;

#[derive(Debug, PartialEq, Eq)]
pub enum UpdateDecision {
    Ignore,
    SetAmount { amount: Amount },
    Rejected { reason: DecideError },
}

/// Stock is checked before membership: an absent product with too little
/// stock is reported as out of stock.
pub fn decide_update(cart: &Cart, command: &UpdateProductAmount, stock: &Stock) -> UpdateDecision {
    if command.is_ignorable() {
        return UpdateDecision::Ignore;
    }
    if command.amount > stock.amount {
        return UpdateDecision::Rejected {
            reason: DecideError::OutOfStock {
                product_id: command.product_id,
                requested: command.amount,
                available: stock.amount,
            },
        };
    }
    match cart.find(command.product_id) {
        Some(_) => UpdateDecision::SetAmount {
            amount: command.amount,
        },
        None => UpdateDecision::Rejected {
            reason: DecideError::NotInCart {
                product_id: command.product_id,
            },
        },
    }
}
