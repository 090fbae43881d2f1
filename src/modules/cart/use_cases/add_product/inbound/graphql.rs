use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::cart::adapters::inbound::graphql_error::graphql_error;
use crate::modules::cart::core::notice::CartNotice;
use crate::modules::cart::use_cases::add_product::command::AddProduct;
use crate::modules::cart::use_cases::view_cart::projection::CartView;
use crate::shared::core::primitives::ProductId;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct AddProductMutation;

#[Object]
impl AddProductMutation {
    async fn add_product(&self, context: &Context<'_>, product_id: ProductId) -> GqlResult<CartView> {
        let state = context.data_unchecked::<AppState>();
        state
            .add_product
            .handle(AddProduct { product_id })
            .await
            .map(|cart| CartView::from(&cart))
            .map_err(|e| graphql_error(&e, CartNotice::AddFailed))
    }
}
