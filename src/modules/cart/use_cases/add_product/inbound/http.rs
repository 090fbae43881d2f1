use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::cart::adapters::inbound::http_error::error_response;
use crate::modules::cart::core::notice::CartNotice;
use crate::modules::cart::use_cases::add_product::command::AddProduct;
use crate::modules::cart::use_cases::view_cart::projection::CartView;
use crate::shared::core::primitives::ProductId;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AddProductBody {
    pub product_id: ProductId,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<AddProductBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = AddProduct {
        product_id: body.product_id,
    };

    match state.add_product.handle(command).await {
        Ok(cart) => Json(CartView::from(&cart)).into_response(),
        Err(e) => error_response(&e, CartNotice::AddFailed),
    }
}
