use async_graphql::{Context, Object};

use crate::modules::cart::use_cases::view_cart::projection::{CartSummary, CartView};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn cart(&self, context: &Context<'_>) -> CartView {
        let state = context.data_unchecked::<AppState>();
        CartView::from(&state.store.snapshot().await)
    }

    async fn cart_summary(&self, context: &Context<'_>) -> CartSummary {
        let state = context.data_unchecked::<AppState>();
        CartSummary::from(&state.store.snapshot().await)
    }
}
