use axum::{Json, extract::State, response::IntoResponse};

use crate::modules::cart::use_cases::view_cart::projection::{CartSummary, CartView};
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    let cart = state.store.snapshot().await;
    Json(CartView::from(&cart))
}

pub async fn handle_summary(State(state): State<AppState>) -> impl IntoResponse {
    let cart = state.store.snapshot().await;
    Json(CartSummary::from(&cart))
}
