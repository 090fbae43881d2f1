use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::core::decision::DecideError;
use crate::modules::cart::use_cases::remove_product::command::RemoveProduct;

#[derive(Debug, PartialEq, Eq)]
pub enum RemoveDecision {
    Remove { index: usize },
    Rejected { reason: DecideError },
}

pub fn decide_remove(cart: &Cart, command: &RemoveProduct) -> RemoveDecision {
    match cart.position(command.product_id) {
        Some(index) => RemoveDecision::Remove { index },
        None => RemoveDecision::Rejected {
            reason: DecideError::NotInCart {
                product_id: command.product_id,
            },
        },
    }
}
