use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::cart::adapters::inbound::http_error::error_response;
use crate::modules::cart::core::notice::CartNotice;
use crate::modules::cart::use_cases::update_product_amount::command::UpdateProductAmount;
use crate::modules::cart::use_cases::view_cart::projection::CartView;
use crate::shared::core::primitives::{Amount, ProductId};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UpdateProductAmountBody {
    pub amount: Amount,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
    body: Result<Json<UpdateProductAmountBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = UpdateProductAmount {
        product_id,
        amount: body.amount,
    };

    match state.update_product_amount.handle(command).await {
        Ok(cart) => Json(CartView::from(&cart)).into_response(),
        Err(e) => error_response(&e, CartNotice::UpdateFailed),
    }
}
