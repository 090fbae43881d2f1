use async_graphql::{Json, SimpleObject};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::core::product::LineItem;
use crate::shared::core::primitives::{Amount, ProductId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
pub struct LineItemView {
    pub id: ProductId,
    pub title: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
    /// Catalog attributes without a typed field, as served.
    pub attributes: Json<Map<String, Value>>,
    pub amount: Amount,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
pub struct CartView {
    pub items: Vec<LineItemView>,
    /// Sum of all line amounts.
    pub item_count: Amount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
pub struct CartSummary {
    pub lines: u32,
    pub item_count: Amount,
}

impl From<&LineItem> for LineItemView {
    fn from(item: &LineItem) -> Self {
        Self {
            id: item.product.id,
            title: item.product.title.clone(),
            price: item.product.price,
            image: item.product.image.clone(),
            attributes: Json(item.product.attributes.clone()),
            amount: item.amount,
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().iter().map(LineItemView::from).collect(),
            item_count: cart.item_count(),
        }
    }
}

impl From<&Cart> for CartSummary {
    fn from(cart: &Cart) -> Self {
        Self {
            lines: u32::try_from(cart.len()).unwrap_or(u32::MAX),
            item_count: cart.item_count(),
        }
    }
}

#[cfg(test)]
mod cart_view_projection_tests {
    use super::*;
    use crate::tests::fixtures::products::make_line_item;
    use rstest::rstest;

    #[rstest]
    fn it_should_project_lines_in_cart_order() {
        let cart = Cart::from(vec![make_line_item(3, 2), make_line_item(1, 1)]);
        let view = CartView::from(&cart);
        let ids: Vec<_> = view.items.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(view.items[0].amount, 2);
        assert_eq!(view.items[0].title.as_deref(), Some("Sneaker 3"));
        assert_eq!(view.item_count, 3);
    }

    #[rstest]
    fn it_should_carry_untyped_catalog_attributes() {
        let mut item = make_line_item(1, 1);
        item.product
            .attributes
            .insert("brand".to_string(), Value::from("Acme"));
        let view = LineItemView::from(&item);
        assert_eq!(view.attributes.0["brand"], "Acme");
    }

    #[rstest]
    fn it_should_summarize_lines_and_units() {
        let cart = Cart::from(vec![make_line_item(3, 2), make_line_item(1, 4)]);
        assert_eq!(
            CartSummary::from(&cart),
            CartSummary {
                lines: 2,
                item_count: 6
            }
        );
        assert_eq!(
            CartSummary::from(&Cart::new()),
            CartSummary {
                lines: 0,
                item_count: 0
            }
        );
    }
}
