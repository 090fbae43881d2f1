use crate::modules::cart::core::product::{LineItem, Product};
use crate::shared::core::primitives::{Amount, ProductId};

pub fn make_product(id: ProductId) -> Product {
    Product {
        id,
        title: Some(format!("Sneaker {id}")),
        price: Some(99.9 + id as f64),
        image: Some(format!("https://cdn.example/sneakers/{id}.jpg")),
        attributes: Default::default(),
    }
}

pub fn make_line_item(id: ProductId, amount: Amount) -> LineItem {
    LineItem {
        product: make_product(id),
        amount,
    }
}
