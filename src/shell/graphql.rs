use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::modules::cart::use_cases::add_product::inbound::graphql::AddProductMutation;
use crate::modules::cart::use_cases::remove_product::inbound::graphql::RemoveProductMutation;
use crate::modules::cart::use_cases::update_product_amount::inbound::graphql::UpdateProductAmountMutation;
pub use crate::modules::cart::use_cases::view_cart::inbound::graphql::QueryRoot;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    AddProductMutation,
    RemoveProductMutation,
    UpdateProductAmountMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}
