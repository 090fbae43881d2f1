use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::modules::cart::adapters::inbound::http_error::error_response;
use crate::modules::cart::core::notice::CartNotice;
use crate::modules::cart::use_cases::remove_product::command::RemoveProduct;
use crate::modules::cart::use_cases::view_cart::projection::CartView;
use crate::shared::core::primitives::ProductId;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
) -> impl IntoResponse {
    match state
        .remove_product
        .handle(RemoveProduct { product_id })
        .await
    {
        Ok(cart) => Json(CartView::from(&cart)).into_response(),
        Err(e) => error_response(&e, CartNotice::RemoveFailed),
    }
}
