use serde::Serialize;

use crate::modules::cart::core::product::LineItem;
use crate::shared::core::primitives::{Amount, ProductId};

/// Ordered line items, unique by product id, in insertion order.
///
/// All mutators consume `self` and hand back the next cart, so a handler can
/// build the candidate state and only commit it once it has been persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn find(&self, product_id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id() == product_id)
    }

    pub fn position(&self, product_id: ProductId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == product_id)
    }

    pub fn amount_of(&self, product_id: ProductId) -> Option<Amount> {
        self.find(product_id).map(|item| item.amount)
    }

    pub fn item_count(&self) -> Amount {
        self.items
            .iter()
            .fold(0, |total: Amount, item| total.saturating_add(item.amount))
    }

    /// Appends `item` unless its id is already present.
    pub fn with_appended(mut self, item: LineItem) -> Self {
        if self.position(item.id()).is_none() {
            self.items.push(item);
        }
        self
    }

    pub fn with_amount(mut self, product_id: ProductId, amount: Amount) -> Self {
        if let Some(item) = self.items.iter_mut().find(|item| item.id() == product_id) {
            item.amount = amount;
        }
        self
    }

    pub fn without_index(mut self, index: usize) -> Self {
        if index < self.items.len() {
            self.items.remove(index);
        }
        self
    }
}

impl From<Vec<LineItem>> for Cart {
    fn from(items: Vec<LineItem>) -> Self {
        items
            .into_iter()
            .fold(Cart::new(), |cart, item| cart.with_appended(item))
    }
}
