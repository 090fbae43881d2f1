use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::modules::cart::use_cases::add_product::inbound::http as add_http;
use crate::modules::cart::use_cases::remove_product::inbound::http as remove_http;
use crate::modules::cart::use_cases::update_product_amount::inbound::http as update_http;
use crate::modules::cart::use_cases::view_cart::inbound::http as view_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/cart", get(view_http::handle))
        .route("/cart/summary", get(view_http::handle_summary))
        .route("/cart/products", post(add_http::handle))
        .route(
            "/cart/products/{product_id}",
            patch(update_http::handle).delete(remove_http::handle),
        )
        .with_state(state)
}
