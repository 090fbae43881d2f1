use crate::modules::cart::application::cart_store::CartStore;
use crate::modules::cart::use_cases::add_product::handler::AddProductHandler;
use crate::modules::cart::use_cases::remove_product::handler::RemoveProductHandler;
use crate::modules::cart::use_cases::update_product_amount::handler::UpdateProductAmountHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<CartStore>,
    pub add_product: Arc<AddProductHandler>,
    pub remove_product: Arc<RemoveProductHandler>,
    pub update_product_amount: Arc<UpdateProductAmountHandler>,
}
