use axum::{Json, http::StatusCode, response::IntoResponse, response::Response};
use serde::Serialize;

use crate::modules::cart::application::errors::CartError;
use crate::modules::cart::core::decision::DecideError;
use crate::modules::cart::core::notice::CartNotice;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

pub fn status_for(err: &CartError) -> StatusCode {
    match err {
        CartError::Rejected(DecideError::OutOfStock { .. }) => StatusCode::CONFLICT,
        CartError::Rejected(DecideError::NotInCart { .. }) => StatusCode::NOT_FOUND,
        CartError::Api(_) => StatusCode::BAD_GATEWAY,
        CartError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Error response carrying the same message the notification sink received.
pub fn error_response(err: &CartError, operation_failed: CartNotice) -> Response {
    (
        status_for(err),
        Json(ErrorBody {
            error: err.notice(operation_failed).message(),
        }),
    )
        .into_response()
}
