use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::cart::adapters::inbound::graphql_error::graphql_error;
use crate::modules::cart::core::notice::CartNotice;
use crate::modules::cart::use_cases::update_product_amount::command::UpdateProductAmount;
use crate::modules::cart::use_cases::view_cart::projection::CartView;
use crate::shared::core::primitives::{Amount, ProductId};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct UpdateProductAmountMutation;

#[Object]
impl UpdateProductAmountMutation {
    async fn update_product_amount(
        &self,
        context: &Context<'_>,
        product_id: ProductId,
        amount: Amount,
    ) -> GqlResult<CartView> {
        let state = context.data_unchecked::<AppState>();
        state
            .update_product_amount
            .handle(UpdateProductAmount { product_id, amount })
            .await
            .map(|cart| CartView::from(&cart))
            .map_err(|e| graphql_error(&e, CartNotice::UpdateFailed))
    }
}
